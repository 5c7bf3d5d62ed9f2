//! Authoritative game state
//!
//! Every change a resolution pass makes to entities goes through one of the
//! mutators here. Passes never reach into an entity and flip fields
//! themselves.

use ahash::AHashMap;
use std::collections::VecDeque;

use crate::catalog::RuleCatalog;
use crate::core::error::{GunneryError, Result};
use crate::core::types::{AmmoBinId, EntityId, MountId, Turn};
use crate::game::entity::Entity;
use crate::game::location::{Location, LocationState};
use crate::game::mount::{AmmoBin, CritSlot, WeaponMount};
use crate::report::CombatLog;
use crate::resolution::AttackDescriptor;

/// How damage meets a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageMode {
    /// Armor first, then internal structure
    Standard,
    /// Straight to internal structure (ammo explosions)
    Internal,
}

/// What one call to `apply_damage` did to one location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DamageResult {
    pub armor_absorbed: u32,
    pub armor_remaining: u32,
    pub structure_absorbed: u32,
    pub structure_remaining: u32,
    pub location_destroyed: bool,
    /// Arm lost along with its side torso
    pub collateral: Option<Location>,
    /// Working equipment knocked out with the destroyed location(s)
    pub lost: Vec<CritSlot>,
    pub entity_destroyed: bool,
    /// Damage left over after the location was destroyed
    pub excess: u32,
    /// Location was already gone; nothing was applied
    pub no_effect: bool,
}

/// Entities, the declared-attack queue and the session log
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub turn: Turn,
    entities: Vec<Entity>,
    index: AHashMap<EntityId, usize>,
    pub(crate) queue: VecDeque<AttackDescriptor>,
    pub(crate) log: CombatLog,
    pub(crate) next_attack_seq: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut state = Self::new();
        for entity in entities {
            state.add_entity(entity);
        }
        state
    }

    /// Add an entity, replacing any existing entity with the same id
    pub fn add_entity(&mut self, entity: Entity) {
        match self.index.get(&entity.id) {
            Some(&idx) => self.entities[idx] = entity,
            None => {
                self.index.insert(entity.id, self.entities.len());
                self.entities.push(entity);
            }
        }
    }

    pub fn entity(&self, id: EntityId) -> Result<&Entity> {
        self.index
            .get(&id)
            .map(|&idx| &self.entities[idx])
            .ok_or(GunneryError::UnknownEntity(id))
    }

    fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity> {
        match self.index.get(&id) {
            Some(&idx) => Ok(&mut self.entities[idx]),
            None => Err(GunneryError::UnknownEntity(id)),
        }
    }

    /// Entities in insertion order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn mount(&self, entity: EntityId, mount: MountId) -> Result<&WeaponMount> {
        self.entity(entity)?
            .mount(mount)
            .ok_or(GunneryError::UnknownMount { entity, mount })
    }

    fn mount_mut(&mut self, entity: EntityId, mount: MountId) -> Result<&mut WeaponMount> {
        self.entity_mut(entity)?
            .mount_mut(mount)
            .ok_or(GunneryError::UnknownMount { entity, mount })
    }

    pub fn bin(&self, entity: EntityId, bin: AmmoBinId) -> Result<&AmmoBin> {
        self.entity(entity)?
            .bin(bin)
            .ok_or(GunneryError::UnknownAmmoBin { entity, bin })
    }

    fn bin_mut(&mut self, entity: EntityId, bin: AmmoBinId) -> Result<&mut AmmoBin> {
        self.entity_mut(entity)?
            .bin_mut(bin)
            .ok_or(GunneryError::UnknownAmmoBin { entity, bin })
    }

    /// Session combat log: every phase resolved so far
    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    /// Attacks declared but not yet resolved, in declaration order
    pub fn pending(&self) -> impl Iterator<Item = &AttackDescriptor> {
        self.queue.iter()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Queue an attack for the next firing phase
    ///
    /// Malformed descriptors are rejected here rather than mid-phase.
    pub fn declare_attack(&mut self, attack: AttackDescriptor, catalog: &RuleCatalog) -> Result<()> {
        attack.validate(self, catalog)?;
        tracing::debug!(
            attacker = %attack.attacker,
            target = %attack.target,
            mount = attack.mount.0,
            "Attack declared"
        );
        self.queue.push_back(attack);
        Ok(())
    }

    // ===== MUTATORS =====

    /// Jam a weapon. Jams persist until repaired outside combat.
    pub fn jam_mount(&mut self, entity: EntityId, mount: MountId) -> Result<()> {
        tracing::debug!(entity = %entity, mount = mount.0, "Weapon jammed");
        self.mount_mut(entity, mount)?.jammed = true;
        Ok(())
    }

    /// Mark a weapon as hit (damaged, out of action)
    pub fn damage_mount(&mut self, entity: EntityId, mount: MountId) -> Result<()> {
        tracing::debug!(entity = %entity, mount = mount.0, "Weapon damaged");
        self.mount_mut(entity, mount)?.hit = true;
        Ok(())
    }

    /// Remove up to `rounds` from a bin; returns how many were removed
    pub fn consume_ammo(&mut self, entity: EntityId, bin: AmmoBinId, rounds: u32) -> Result<u32> {
        let bin_state = self.bin_mut(entity, bin)?;
        let taken = rounds.min(bin_state.rounds);
        bin_state.rounds -= taken;
        tracing::trace!(entity = %entity, bin = bin.0, taken, left = bin_state.rounds, "Ammo consumed");
        Ok(taken)
    }

    /// Empty a bin that has been struck; returns the rounds it held
    pub fn detonate_bin(&mut self, entity: EntityId, bin: AmmoBinId) -> Result<u32> {
        let bin_state = self.bin_mut(entity, bin)?;
        let rounds = std::mem::take(&mut bin_state.rounds);
        tracing::debug!(entity = %entity, bin = bin.0, rounds, "Ammo bin detonated");
        Ok(rounds)
    }

    /// Accrue weapon heat for this turn
    pub fn add_heat(&mut self, entity: EntityId, mount: MountId, heat: u32) -> Result<()> {
        self.mount_mut(entity, mount)?.heat_this_turn += heat;
        let entity_state = self.entity_mut(entity)?;
        entity_state.heat += heat;
        tracing::trace!(entity = %entity, heat, total = entity_state.heat, "Heat added");
        Ok(())
    }

    /// Reset per-turn heat and shot counters on every mount
    pub(crate) fn clear_turn_accrual(&mut self) {
        for mount in self.entities.iter_mut().flat_map(|e| e.mounts.iter_mut()) {
            mount.heat_this_turn = 0;
            mount.shots_fired = 0;
        }
    }

    pub fn record_shots(&mut self, entity: EntityId, mount: MountId, shots: u32) -> Result<()> {
        self.mount_mut(entity, mount)?.shots_fired += shots;
        Ok(())
    }

    /// Apply damage to a single location
    ///
    /// Transfer of the excess is left to the caller so each step can be
    /// reported. A destroyed location takes its equipment with it, a
    /// destroyed side torso also takes its arm, and losing a vital location
    /// destroys the entity.
    pub fn apply_damage(
        &mut self,
        entity: EntityId,
        location: Location,
        amount: u32,
        mode: DamageMode,
    ) -> Result<DamageResult> {
        let turn = self.turn;
        let entity_state = self.entity_mut(entity)?;
        let loc = entity_state.location_mut(location);
        if loc.destroyed {
            return Ok(DamageResult {
                excess: amount,
                no_effect: true,
                ..Default::default()
            });
        }

        let mut result = DamageResult::default();
        let mut remaining = amount;

        if mode == DamageMode::Standard {
            result.armor_absorbed = remaining.min(loc.armor);
            loc.armor -= result.armor_absorbed;
            remaining -= result.armor_absorbed;
        }

        result.structure_absorbed = remaining.min(loc.structure);
        loc.structure -= result.structure_absorbed;
        remaining -= result.structure_absorbed;

        if loc.structure == 0 && (result.structure_absorbed > 0 || remaining > 0) {
            loc.destroyed = true;
            loc.armor = 0;
            result.location_destroyed = true;
            result.excess = remaining;
        }
        result.armor_remaining = loc.armor;
        result.structure_remaining = loc.structure;

        if result.location_destroyed {
            result.lost = entity_state.strip_location(location);
            if let Some(arm) = location.attached_arm() {
                let arm_state = entity_state.location_mut(arm);
                if !arm_state.destroyed {
                    *arm_state = LocationState {
                        armor: 0,
                        structure: 0,
                        destroyed: true,
                    };
                    result.collateral = Some(arm);
                    result.lost.extend(entity_state.strip_location(arm));
                }
            }
            if location.is_vital() && !entity_state.destroyed {
                entity_state.destroyed = true;
                entity_state.destroyed_in = Some(turn);
                result.entity_destroyed = true;
            }
        }

        tracing::debug!(
            entity = %entity,
            location = location.name(),
            amount,
            armor = result.armor_remaining,
            structure = result.structure_remaining,
            destroyed = result.location_destroyed,
            "Damage applied"
        );
        Ok(result)
    }
}
