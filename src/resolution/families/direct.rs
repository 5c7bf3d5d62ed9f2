//! Direct-fire weapons: standard autocannons and energy weapons
//!
//! Also home of the default pre-fire check every family without its own
//! override uses.

use crate::catalog::AmmoFlag;
use crate::core::error::Result;
use crate::dice::{Dice, RollPurpose};
use crate::report::{messages, Report};
use crate::resolution::context::ResolutionContext;
use crate::resolution::damage::DamagePacket;
use crate::resolution::families::hit_location;
use crate::resolution::handler::PreFire;
use crate::resolution::outcome::PreemptReason;

/// Malfunction check against the catalog threshold
///
/// A 2d6 at or below the threshold jams the weapon. Ammo flagged inert on
/// malfunction also damages the weapon and gets its own report.
pub fn pre_fire_check(ctx: &mut ResolutionContext<'_>) -> Result<PreFire> {
    let weapon = ctx.weapon()?;
    let Some(threshold) = weapon.malfunction_threshold else {
        return Ok(PreFire::Proceed);
    };

    let roll = ctx.roll(RollPurpose::PreFire, Dice::TWO_D6)?;
    if roll.value > threshold {
        ctx.silent(roll);
        return Ok(PreFire::Proceed);
    }

    let (attacker, mount) = (ctx.attack.attacker, ctx.attack.mount);
    ctx.state.jam_mount(attacker, mount)?;

    let inert = ctx
        .ammo()?
        .map_or(false, |ammo| ammo.has_flag(AmmoFlag::InertOnMalfunction));
    let message = if inert {
        ctx.state.damage_mount(attacker, mount)?;
        messages::MALFUNCTION_DAMAGED
    } else {
        messages::WEAPON_JAMMED
    };

    let report = Report::new(message, ctx.weapon_subject())
        .add(ctx.weapon_label()?)
        .add(roll.value);
    ctx.report_roll(report, roll);
    Ok(PreFire::Stop(PreemptReason::Malfunction))
}

/// One projectile, one location, full catalog damage
pub fn single_hit(ctx: &mut ResolutionContext<'_>) -> Result<Vec<DamagePacket>> {
    let damage = ctx.weapon()?.damage;
    let target = ctx.attack.target;
    Ok(vec![hit_location(ctx, target, damage)?])
}
