//! Hit locations and the front hit-location table

use serde::{Deserialize, Serialize};

/// Body location of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Head,
    CenterTorso,
    LeftTorso,
    RightTorso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::Head,
        Location::CenterTorso,
        Location::LeftTorso,
        Location::RightTorso,
        Location::LeftArm,
        Location::RightArm,
        Location::LeftLeg,
        Location::RightLeg,
    ];

    /// Index into per-location arrays
    pub fn index(&self) -> usize {
        match self {
            Location::Head => 0,
            Location::CenterTorso => 1,
            Location::LeftTorso => 2,
            Location::RightTorso => 3,
            Location::LeftArm => 4,
            Location::RightArm => 5,
            Location::LeftLeg => 6,
            Location::RightLeg => 7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Location::Head => "head",
            Location::CenterTorso => "center torso",
            Location::LeftTorso => "left torso",
            Location::RightTorso => "right torso",
            Location::LeftArm => "left arm",
            Location::RightArm => "right arm",
            Location::LeftLeg => "left leg",
            Location::RightLeg => "right leg",
        }
    }

    /// Front hit-location table, 2d6
    pub fn from_hit_roll(roll: u32) -> Option<Location> {
        match roll {
            2 | 7 => Some(Location::CenterTorso),
            3 | 4 => Some(Location::RightArm),
            5 => Some(Location::RightLeg),
            6 => Some(Location::RightTorso),
            8 => Some(Location::LeftTorso),
            9 => Some(Location::LeftLeg),
            10 | 11 => Some(Location::LeftArm),
            12 => Some(Location::Head),
            _ => None,
        }
    }

    /// A location roll of 2 may score a critical even if armor holds
    pub fn hit_roll_threatens_critical(roll: u32) -> bool {
        roll == 2
    }

    /// Where excess damage goes once this location is destroyed
    pub fn transfer_to(&self) -> Option<Location> {
        match self {
            Location::LeftArm | Location::LeftLeg => Some(Location::LeftTorso),
            Location::RightArm | Location::RightLeg => Some(Location::RightTorso),
            Location::LeftTorso | Location::RightTorso => Some(Location::CenterTorso),
            Location::Head | Location::CenterTorso => None,
        }
    }

    /// Losing this location destroys the unit
    pub fn is_vital(&self) -> bool {
        matches!(self, Location::Head | Location::CenterTorso)
    }

    /// Arm that falls off when this side torso is destroyed
    pub fn attached_arm(&self) -> Option<Location> {
        match self {
            Location::LeftTorso => Some(Location::LeftArm),
            Location::RightTorso => Some(Location::RightArm),
            _ => None,
        }
    }
}

/// Armor and internal structure remaining at one location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationState {
    pub armor: u32,
    pub structure: u32,
    #[serde(default)]
    pub destroyed: bool,
}

impl LocationState {
    pub fn new(armor: u32, structure: u32) -> Self {
        Self {
            armor,
            structure,
            destroyed: false,
        }
    }
}
