//! Declared attacks

use serde::{Deserialize, Serialize};

use crate::catalog::RuleCatalog;
use crate::core::error::{GunneryError, Result};
use crate::core::types::{AmmoBinId, EntityId, MountId};
use crate::game::GameState;

/// One contribution to the to-hit number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToHitModifier {
    pub value: i32,
    pub description: String,
}

/// Precomputed to-hit number and its breakdown
///
/// The number is computed upstream; the engine only compares a 2d6 roll
/// against `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToHitData {
    pub value: i32,
    #[serde(default)]
    pub modifiers: Vec<ToHitModifier>,
}

impl ToHitData {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, description: &str, value: i32) -> Self {
        self.modifiers.push(ToHitModifier {
            value,
            description: description.into(),
        });
        self
    }

    /// Does a 2d6 total meet the number?
    pub fn is_hit(&self, roll: u32) -> bool {
        roll as i64 >= self.value as i64
    }
}

/// Range band the attack was declared at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeBand {
    #[default]
    Short,
    Medium,
    Long,
    Extreme,
}

/// Per-attack flags that change how a weapon family resolves
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttackContext {
    #[serde(default)]
    pub range: RangeBand,
    /// Fire an ultra autocannon at double rate
    #[serde(default)]
    pub rapid_fire: bool,
    /// Other entities caught in an artillery strike
    #[serde(default)]
    pub area_targets: Vec<EntityId>,
}

/// A single weapon firing at a single target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackDescriptor {
    pub attacker: EntityId,
    pub target: EntityId,
    pub mount: MountId,
    /// Bin feeding the weapon; `None` for energy weapons or an unloaded mount
    #[serde(default)]
    pub ammo: Option<AmmoBinId>,
    pub to_hit: ToHitData,
    #[serde(default)]
    pub context: AttackContext,
}

impl AttackDescriptor {
    pub fn new(attacker: EntityId, target: EntityId, mount: MountId, to_hit: i32) -> Self {
        Self {
            attacker,
            target,
            mount,
            ammo: None,
            to_hit: ToHitData::new(to_hit),
            context: AttackContext::default(),
        }
    }

    pub fn with_ammo(mut self, bin: AmmoBinId) -> Self {
        self.ammo = Some(bin);
        self
    }

    pub fn with_rapid_fire(mut self) -> Self {
        self.context.rapid_fire = true;
        self
    }

    pub fn with_area_targets(mut self, targets: Vec<EntityId>) -> Self {
        self.context.area_targets = targets;
        self
    }

    /// Check every id against the state and the catalog
    pub fn validate(&self, state: &GameState, catalog: &RuleCatalog) -> Result<()> {
        let attacker = state.entity(self.attacker)?;
        state.entity(self.target)?;
        for id in &self.context.area_targets {
            state.entity(*id)?;
        }

        let mount = attacker.mount(self.mount).ok_or(GunneryError::UnknownMount {
            entity: self.attacker,
            mount: self.mount,
        })?;
        let weapon = catalog.weapon(&mount.weapon_type)?;

        if let Some(bin_id) = self.ammo {
            let bin = attacker.bin(bin_id).ok_or(GunneryError::UnknownAmmoBin {
                entity: self.attacker,
                bin: bin_id,
            })?;
            let ammo = catalog.ammo(&bin.ammo_type)?;
            if !weapon.accepts(&ammo.kind) {
                return Err(GunneryError::AmmoMismatch {
                    weapon: weapon.name.clone(),
                    ammo: ammo.name.clone(),
                });
            }
        }
        Ok(())
    }
}
