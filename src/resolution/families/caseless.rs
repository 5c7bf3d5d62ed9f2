//! Caseless autocannon
//!
//! Replaces the default pre-fire check with a fixed 2d6 jam threshold. A jam
//! while caseless rounds are loaded also damages the weapon, with no
//! secondary explosion. Cased rounds in the same weapon only jam it.

use crate::core::error::Result;
use crate::dice::{Dice, RollPurpose};
use crate::report::{messages, Report};
use crate::resolution::context::ResolutionContext;
use crate::resolution::handler::PreFire;
use crate::resolution::outcome::PreemptReason;

/// Pre-fire 2d6 result at or below which the weapon jams
pub const JAM_THRESHOLD: u32 = 2;

pub fn pre_fire_check(ctx: &mut ResolutionContext<'_>) -> Result<PreFire> {
    let roll = ctx.roll(RollPurpose::PreFire, Dice::TWO_D6)?;
    if roll.value > JAM_THRESHOLD {
        ctx.silent(roll);
        return Ok(PreFire::Proceed);
    }

    let (attacker, mount) = (ctx.attack.attacker, ctx.attack.mount);
    ctx.state.jam_mount(attacker, mount)?;

    let caseless = ctx.ammo()?.map_or(false, |ammo| ammo.is_caseless());
    let message = if caseless {
        ctx.state.damage_mount(attacker, mount)?;
        messages::CASELESS_MALFUNCTION
    } else {
        messages::WEAPON_JAMMED
    };

    let report = Report::new(message, ctx.weapon_subject())
        .add(ctx.weapon_label()?)
        .add(roll.value);
    ctx.report_roll(report, roll);
    Ok(PreFire::Stop(PreemptReason::Malfunction))
}
