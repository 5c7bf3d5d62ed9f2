//! Runtime state of weapon mounts and ammunition bins

use serde::{Deserialize, Serialize};

use crate::core::types::{AmmoBinId, MountId};
use crate::game::location::Location;

/// A weapon installed on an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponMount {
    pub id: MountId,
    /// Catalog key of the weapon type
    pub weapon_type: String,
    pub location: Location,
    /// Jammed weapons cannot fire until repaired outside combat
    #[serde(default)]
    pub jammed: bool,
    /// Weapon has taken damage and is out of action
    #[serde(default)]
    pub hit: bool,
    #[serde(default)]
    pub heat_this_turn: u32,
    #[serde(default)]
    pub shots_fired: u32,
}

impl WeaponMount {
    pub fn new(id: MountId, weapon_type: &str, location: Location) -> Self {
        Self {
            id,
            weapon_type: weapon_type.into(),
            location,
            jammed: false,
            hit: false,
            heat_this_turn: 0,
            shots_fired: 0,
        }
    }

    pub fn can_fire(&self) -> bool {
        !self.jammed && !self.hit
    }
}

/// A bin of rounds feeding one or more weapons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoBin {
    pub id: AmmoBinId,
    /// Catalog key of the ammo type
    pub ammo_type: String,
    pub location: Location,
    pub rounds: u32,
}

impl AmmoBin {
    pub fn new(id: AmmoBinId, ammo_type: &str, location: Location, rounds: u32) -> Self {
        Self {
            id,
            ammo_type: ammo_type.into(),
            location,
            rounds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rounds == 0
    }
}

/// Equipment a critical hit can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CritSlot {
    Mount(MountId),
    AmmoBin(AmmoBinId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mount_can_fire() {
        let mut mount = WeaponMount::new(MountId(1), "AC/10", Location::RightTorso);
        assert!(mount.can_fire());

        mount.jammed = true;
        assert!(!mount.can_fire());
    }

    #[test]
    fn test_bin_empty() {
        let bin = AmmoBin::new(AmmoBinId(1), "AC/10 Ammo", Location::LeftTorso, 0);
        assert!(bin.is_empty());
    }
}
