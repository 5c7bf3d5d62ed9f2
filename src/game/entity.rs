//! Units that fire and take fire

use serde::{Deserialize, Serialize};

use crate::core::types::{AmmoBinId, EntityId, MountId, Turn};
use crate::game::location::{Location, LocationState};
use crate::game::mount::{AmmoBin, CritSlot, WeaponMount};

/// A unit on the field: per-location armor plus installed equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// Indexed by `Location::index`
    pub locations: [LocationState; 8],
    #[serde(default)]
    pub mounts: Vec<WeaponMount>,
    #[serde(default)]
    pub bins: Vec<AmmoBin>,
    /// Heat accrued by weapon fire
    #[serde(default)]
    pub heat: u32,
    #[serde(default)]
    pub destroyed: bool,
    /// Turn the entity was destroyed in. A destroyed entity without one
    /// entered play as a wreck.
    #[serde(default)]
    pub destroyed_in: Option<Turn>,
}

impl Entity {
    pub fn new(id: EntityId, name: &str, locations: [LocationState; 8]) -> Self {
        Self {
            id,
            name: name.into(),
            locations,
            mounts: Vec::new(),
            bins: Vec::new(),
            heat: 0,
            destroyed: false,
            destroyed_in: None,
        }
    }

    /// Test entity: medium mech, no equipment
    pub fn test_mech(id: EntityId, name: &str) -> Self {
        let mut locations = [LocationState::default(); 8];
        for location in Location::ALL {
            locations[location.index()] = match location {
                Location::Head => LocationState::new(9, 3),
                Location::CenterTorso => LocationState::new(20, 16),
                Location::LeftTorso | Location::RightTorso => LocationState::new(15, 12),
                Location::LeftArm | Location::RightArm => LocationState::new(10, 8),
                Location::LeftLeg | Location::RightLeg => LocationState::new(15, 12),
            };
        }
        Self::new(id, name, locations)
    }

    pub fn with_mount(mut self, mount: WeaponMount) -> Self {
        self.mounts.push(mount);
        self
    }

    pub fn with_bin(mut self, bin: AmmoBin) -> Self {
        self.bins.push(bin);
        self
    }

    pub fn location(&self, location: Location) -> &LocationState {
        &self.locations[location.index()]
    }

    pub(crate) fn location_mut(&mut self, location: Location) -> &mut LocationState {
        &mut self.locations[location.index()]
    }

    pub fn mount(&self, id: MountId) -> Option<&WeaponMount> {
        self.mounts.iter().find(|m| m.id == id)
    }

    pub(crate) fn mount_mut(&mut self, id: MountId) -> Option<&mut WeaponMount> {
        self.mounts.iter_mut().find(|m| m.id == id)
    }

    pub fn bin(&self, id: AmmoBinId) -> Option<&AmmoBin> {
        self.bins.iter().find(|b| b.id == id)
    }

    pub(crate) fn bin_mut(&mut self, id: AmmoBinId) -> Option<&mut AmmoBin> {
        self.bins.iter_mut().find(|b| b.id == id)
    }

    /// Equipment a critical hit at `location` can land on
    ///
    /// Mounts already hit are skipped; bins stay eligible even when empty.
    pub fn crit_slots(&self, location: Location) -> Vec<CritSlot> {
        let mounts = self
            .mounts
            .iter()
            .filter(|m| m.location == location && !m.hit)
            .map(|m| CritSlot::Mount(m.id));
        let bins = self
            .bins
            .iter()
            .filter(|b| b.location == location)
            .map(|b| CritSlot::AmmoBin(b.id));
        mounts.chain(bins).collect()
    }

    /// Destroyed before `turn` began. Fire within a turn is simultaneous, so
    /// only a unit lost in an earlier turn is out of the fight.
    pub fn wrecked_before(&self, turn: Turn) -> bool {
        self.destroyed && self.destroyed_in.map_or(true, |lost| lost < turn)
    }

    /// Knock out everything installed at a destroyed location
    ///
    /// Returns the mounts that still worked and the bins that still held
    /// rounds; bins are emptied without detonating.
    pub(crate) fn strip_location(&mut self, location: Location) -> Vec<CritSlot> {
        let mut lost = Vec::new();
        for mount in self
            .mounts
            .iter_mut()
            .filter(|m| m.location == location && !m.hit)
        {
            mount.hit = true;
            lost.push(CritSlot::Mount(mount.id));
        }
        for bin in self
            .bins
            .iter_mut()
            .filter(|b| b.location == location && b.rounds > 0)
        {
            bin.rounds = 0;
            lost.push(CritSlot::AmmoBin(bin.id));
        }
        lost
    }

    /// Total armor left across all locations
    pub fn total_armor(&self) -> u32 {
        self.locations.iter().map(|l| l.armor).sum()
    }
}
