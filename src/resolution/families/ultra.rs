//! Ultra autocannon: optional double-rate fire
//!
//! Only rapid fire risks a jam, and an ultra jam never damages the weapon.
//! A bin too low for two rounds fires single shot with no jam roll. Two
//! rounds fired resolve on the 2-rack cluster column.

use crate::core::error::Result;
use crate::dice::{Dice, RollPurpose};
use crate::report::{messages, Report};
use crate::resolution::context::ResolutionContext;
use crate::resolution::damage::DamagePacket;
use crate::resolution::families::{cluster_volley, direct};
use crate::resolution::handler::PreFire;
use crate::resolution::outcome::PreemptReason;

const RAPID_FIRE_SHOTS: u32 = 2;

pub fn pre_fire_check(ctx: &mut ResolutionContext<'_>) -> Result<PreFire> {
    if !ctx.attack.context.rapid_fire || ctx.rounds_available()? < RAPID_FIRE_SHOTS {
        return Ok(PreFire::Proceed);
    }
    let Some(threshold) = ctx.weapon()?.malfunction_threshold else {
        return Ok(PreFire::Proceed);
    };

    let roll = ctx.roll(RollPurpose::PreFire, Dice::TWO_D6)?;
    if roll.value > threshold {
        ctx.silent(roll);
        return Ok(PreFire::Proceed);
    }

    ctx.state.jam_mount(ctx.attack.attacker, ctx.attack.mount)?;
    let report = Report::new(messages::WEAPON_JAMMED, ctx.weapon_subject())
        .add(ctx.weapon_label()?)
        .add(roll.value);
    ctx.report_roll(report, roll);
    Ok(PreFire::Stop(PreemptReason::Malfunction))
}

/// Rounds this attack fires: two under rapid fire if the bin holds them
pub fn shots(ctx: &mut ResolutionContext<'_>) -> Result<u32> {
    if !ctx.attack.context.rapid_fire || ctx.rounds_available()? < RAPID_FIRE_SHOTS {
        return Ok(1);
    }
    let report = Report::new(messages::RAPID_FIRE, ctx.weapon_subject())
        .add(ctx.weapon_label()?)
        .add(RAPID_FIRE_SHOTS);
    ctx.report(report);
    Ok(RAPID_FIRE_SHOTS)
}

pub fn damage(ctx: &mut ResolutionContext<'_>, shots: u32) -> Result<Vec<DamagePacket>> {
    if shots < RAPID_FIRE_SHOTS {
        return direct::single_hit(ctx);
    }
    let damage = ctx.weapon()?.damage;
    cluster_volley(ctx, RAPID_FIRE_SHOTS, damage, 1)
}
