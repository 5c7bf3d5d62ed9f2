//! Damage application and secondary effects
//!
//! Walks each packet through armor, structure and inward transfer, rolling
//! critical checks on internal damage. Critical hits on explosive bins feed
//! their blast straight back into the same location, so the walk is
//! recursive.

use crate::catalog::AmmoFlag;
use crate::core::error::Result;
use crate::core::types::EntityId;
use crate::dice::{Dice, RollPurpose};
use crate::game::{CritSlot, DamageMode, Location};
use crate::report::{messages, Report, Subject};
use crate::resolution::context::{ResolutionContext, Roll};

/// Damage bound for one location of one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamagePacket {
    pub target: EntityId,
    pub location: Location,
    pub amount: u32,
    /// Location roll allows a critical even if armor holds
    pub threatens_critical: bool,
}

const DAMAGE_INDENT: u8 = 2;
const CRITICAL_INDENT: u8 = 3;

/// Report for equipment that went down with its location
fn equipment_lost(ctx: &ResolutionContext<'_>, target: EntityId, slot: CritSlot) -> Result<Report> {
    let report = match slot {
        CritSlot::Mount(mount) => {
            let mount_state = ctx.state.mount(target, mount)?;
            Report::new(messages::EQUIPMENT_LOST, Subject::mount(target, mount))
                .add(mount_state.weapon_type.as_str())
                .add(mount_state.location.name())
        }
        CritSlot::AmmoBin(bin) => {
            let bin_state = ctx.state.bin(target, bin)?;
            Report::new(messages::EQUIPMENT_LOST, Subject::entity(target))
                .add(format!("{} bin", bin_state.ammo_type))
                .add(bin_state.location.name())
        }
    };
    Ok(report.indent(CRITICAL_INDENT))
}

/// Critical hits scored by a critical-check total
pub fn critical_count(roll: u32, threshold: u32) -> u32 {
    match roll {
        r if r < threshold => 0,
        r if r >= 12 => 3,
        r if r >= 10 => 2,
        _ => 1,
    }
}

/// Step 4: apply packets in the order they were calculated
pub fn apply_packets(ctx: &mut ResolutionContext<'_>, packets: &[DamagePacket]) -> Result<()> {
    for packet in packets {
        apply_to_location(
            ctx,
            packet.target,
            packet.location,
            packet.amount,
            DamageMode::Standard,
            packet.threatens_critical,
        )?;
    }
    Ok(())
}

fn apply_to_location(
    ctx: &mut ResolutionContext<'_>,
    target: EntityId,
    mut location: Location,
    mut amount: u32,
    mode: DamageMode,
    mut force_critical: bool,
) -> Result<()> {
    let name = ctx.entity_name(target)?;
    let subject = Subject::entity(target);

    loop {
        if ctx.state.entity(target)?.destroyed {
            ctx.report(
                Report::new(messages::DAMAGE_NO_EFFECT, subject)
                    .indent(DAMAGE_INDENT)
                    .add(name.as_str()),
            );
            return Ok(());
        }

        let result = ctx.state.apply_damage(target, location, amount, mode)?;

        if !result.no_effect {
            if result.armor_absorbed > 0 {
                ctx.report(
                    Report::new(messages::ARMOR_DAMAGE, subject)
                        .indent(DAMAGE_INDENT)
                        .add(location.name())
                        .add(result.armor_absorbed)
                        .add(result.armor_remaining),
                );
            }
            if result.structure_absorbed > 0 {
                ctx.report(
                    Report::new(messages::STRUCTURE_DAMAGE, subject)
                        .indent(DAMAGE_INDENT)
                        .add(location.name())
                        .add(result.structure_absorbed)
                        .add(result.structure_remaining),
                );
            }
            if result.location_destroyed {
                for lost in std::iter::once(location).chain(result.collateral) {
                    ctx.report(
                        Report::new(messages::LOCATION_DESTROYED, subject)
                            .indent(DAMAGE_INDENT)
                            .add(format!("{}'s {}", name, lost.name())),
                    );
                }
                for slot in &result.lost {
                    let report = equipment_lost(ctx, target, *slot)?;
                    ctx.report(report);
                }
            }
            if result.entity_destroyed {
                tracing::info!(entity = %target, name = %name, "Entity destroyed");
                ctx.report(
                    Report::new(messages::ENTITY_DESTROYED, subject)
                        .indent(DAMAGE_INDENT)
                        .add(name.as_str()),
                );
                return Ok(());
            }
            if !result.location_destroyed && (result.structure_absorbed > 0 || force_critical) {
                critical_check(ctx, target, location)?;
            }
        }
        force_critical = false;

        if result.excess == 0 {
            return Ok(());
        }
        let next = if ctx.rules.transfer_damage {
            location.transfer_to()
        } else {
            None
        };
        match next {
            Some(next) => {
                ctx.report(
                    Report::new(messages::DAMAGE_TRANSFER, subject)
                        .indent(DAMAGE_INDENT)
                        .add(result.excess)
                        .add(next.name()),
                );
                location = next;
                amount = result.excess;
            }
            None => {
                if result.no_effect {
                    ctx.report(
                        Report::new(messages::DAMAGE_NO_EFFECT, subject)
                            .indent(DAMAGE_INDENT)
                            .add(format!("{}'s {}", name, location.name())),
                    );
                }
                return Ok(());
            }
        }
    }
}

fn critical_check(
    ctx: &mut ResolutionContext<'_>,
    target: EntityId,
    location: Location,
) -> Result<()> {
    let roll = ctx.roll(RollPurpose::CriticalCheck, Dice::TWO_D6)?;
    let count = critical_count(roll.value, ctx.rules.critical_threshold);
    ctx.report_roll(
        Report::new(messages::CRITICAL_CHECK, Subject::entity(target))
            .indent(CRITICAL_INDENT)
            .add(location.name())
            .add(roll.value)
            .add(count),
        roll,
    );

    for _ in 0..count {
        let entity = ctx.state.entity(target)?;
        if entity.destroyed || entity.location(location).destroyed {
            break;
        }
        let slots = entity.crit_slots(location);
        if slots.is_empty() {
            ctx.report(
                Report::new(messages::CRITICAL_NO_SLOT, Subject::entity(target))
                    .indent(CRITICAL_INDENT)
                    .add(location.name()),
            );
            break;
        }

        let slot_roll = ctx.roll(RollPurpose::CriticalSlot, Dice::d(slots.len() as u32))?;
        let slot = slots[(slot_roll.value - 1) as usize];
        resolve_critical(ctx, target, location, slot, slot_roll)?;
    }
    Ok(())
}

fn resolve_critical(
    ctx: &mut ResolutionContext<'_>,
    target: EntityId,
    location: Location,
    slot: CritSlot,
    roll: Roll,
) -> Result<()> {
    match slot {
        CritSlot::Mount(mount) => {
            let weapon_type = ctx.state.mount(target, mount)?.weapon_type.clone();
            ctx.state.damage_mount(target, mount)?;
            ctx.report_roll(
                Report::new(messages::CRITICAL_MOUNT, Subject::mount(target, mount))
                    .indent(CRITICAL_INDENT)
                    .add(roll.value)
                    .add(weapon_type),
                roll,
            );
        }
        CritSlot::AmmoBin(bin) => {
            let catalog = ctx.catalog;
            let bin_state = ctx.state.bin(target, bin)?;
            let ammo = catalog.ammo(&bin_state.ammo_type)?;
            let explodes = ctx.rules.ammo_explosions
                && ammo.has_flag(AmmoFlag::Explosive)
                && !bin_state.is_empty();

            if explodes {
                let rounds = ctx.state.detonate_bin(target, bin)?;
                let blast = rounds * ammo.damage_per_shot;
                tracing::info!(entity = %target, ammo = %ammo.name, blast, "Ammo explosion");
                ctx.report_roll(
                    Report::new(messages::AMMO_EXPLOSION, Subject::entity(target))
                        .indent(CRITICAL_INDENT)
                        .add(roll.value)
                        .add(ammo.name.as_str())
                        .add(blast),
                    roll,
                );
                apply_to_location(ctx, target, location, blast, DamageMode::Internal, false)?;
            } else {
                ctx.state.consume_ammo(target, bin, u32::MAX)?;
                ctx.report_roll(
                    Report::new(messages::CRITICAL_AMMO_INERT, Subject::entity(target))
                        .indent(CRITICAL_INDENT)
                        .add(roll.value)
                        .add(ammo.name.as_str()),
                    roll,
                );
            }
        }
    }
    Ok(())
}
