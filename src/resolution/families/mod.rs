//! Weapon family hooks
//!
//! Each family module supplies the pieces of the shared protocol it
//! overrides. The helpers here are the damage-calculation building blocks
//! the families share.

pub mod artillery;
pub mod caseless;
pub mod direct;
pub mod missile;
pub mod ultra;

use crate::catalog::cluster;
use crate::core::error::{GunneryError, Result};
use crate::core::types::EntityId;
use crate::dice::{Dice, RollPurpose};
use crate::game::Location;
use crate::report::{messages, Report, Subject};
use crate::resolution::context::ResolutionContext;
use crate::resolution::damage::DamagePacket;

/// Roll where `amount` lands on `target` and report it
pub(crate) fn hit_location(
    ctx: &mut ResolutionContext<'_>,
    target: EntityId,
    amount: u32,
) -> Result<DamagePacket> {
    let dice = Dice::TWO_D6;
    let roll = ctx.roll(RollPurpose::HitLocation, dice)?;
    let location = Location::from_hit_roll(roll.value).ok_or(GunneryError::RollOutOfRange {
        purpose: RollPurpose::HitLocation,
        dice,
        value: roll.value,
    })?;

    let report = Report::new(messages::HIT_LOCATION, Subject::entity(target))
        .indent(1)
        .add(ctx.entity_name(target)?)
        .add(location.name())
        .add(roll.value)
        .add(amount);
    ctx.report_roll(report, roll);

    Ok(DamagePacket {
        target,
        location,
        amount,
        threatens_critical: Location::hit_roll_threatens_critical(roll.value),
    })
}

/// Split `total` damage into `chunk`-sized packets, one location roll each
pub(crate) fn grouped_damage(
    ctx: &mut ResolutionContext<'_>,
    target: EntityId,
    total: u32,
    chunk: u32,
) -> Result<Vec<DamagePacket>> {
    let chunk = chunk.max(1);
    let mut packets = Vec::new();
    let mut remaining = total;
    while remaining > 0 {
        let amount = remaining.min(chunk);
        packets.push(hit_location(ctx, target, amount)?);
        remaining -= amount;
    }
    Ok(packets)
}

/// Roll a volley on the cluster table and group the hits
///
/// `group` projectiles share one hit-location roll.
pub(crate) fn cluster_volley(
    ctx: &mut ResolutionContext<'_>,
    rack_size: u32,
    damage_each: u32,
    group: u32,
) -> Result<Vec<DamagePacket>> {
    let dice = Dice::TWO_D6;
    let roll = ctx.roll(RollPurpose::Cluster, dice)?;
    let hits = cluster::hits(rack_size, roll.value).ok_or(GunneryError::RollOutOfRange {
        purpose: RollPurpose::Cluster,
        dice,
        value: roll.value,
    })?;

    let report = Report::new(messages::CLUSTER_RESULT, ctx.weapon_subject())
        .indent(1)
        .add(hits)
        .add(rack_size)
        .add(roll.value);
    ctx.report_roll(report, roll);

    let target = ctx.attack.target;
    grouped_damage(ctx, target, hits * damage_each, group.max(1) * damage_each)
}
