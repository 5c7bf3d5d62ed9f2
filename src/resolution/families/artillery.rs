//! Area-effect artillery
//!
//! The target takes full damage; every other entity named in the attack's
//! area takes the weapon's splash damage. Both are applied in fixed-size
//! groups, each with its own location roll.

use crate::core::error::Result;
use crate::report::{messages, Report, Subject};
use crate::resolution::context::ResolutionContext;
use crate::resolution::damage::DamagePacket;
use crate::resolution::families::grouped_damage;

pub fn damage(ctx: &mut ResolutionContext<'_>) -> Result<Vec<DamagePacket>> {
    let weapon = ctx.weapon()?;
    let chunk = ctx.rules.artillery_cluster;
    let attack = ctx.attack;
    let target = attack.target;

    let mut packets = grouped_damage(ctx, target, weapon.damage, chunk)?;

    if weapon.splash_damage == 0 {
        return Ok(packets);
    }
    for &other in &attack.context.area_targets {
        if other == target {
            continue;
        }
        let name = ctx.entity_name(other)?;
        if ctx.state.entity(other)?.destroyed {
            ctx.report(
                Report::new(messages::DAMAGE_NO_EFFECT, Subject::entity(other))
                    .indent(1)
                    .add(name),
            );
            continue;
        }
        ctx.report(
            Report::new(messages::ARTILLERY_SPLASH, Subject::entity(other))
                .indent(1)
                .add(name)
                .add(weapon.splash_damage),
        );
        packets.extend(grouped_damage(ctx, other, weapon.splash_damage, chunk)?);
    }
    Ok(packets)
}
