//! Ammunition type definitions

use serde::{Deserialize, Serialize};

/// Round construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Munition {
    /// Ordinary cased rounds
    #[default]
    Standard,
    /// Propellant bonded to the projectile, no casing
    Caseless,
}

/// Capability flags on an ammo type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmoFlag {
    /// A critical hit on a loaded bin detonates it
    Explosive,
    /// A malfunction while firing this ammo damages the weapon instead of
    /// producing a secondary explosion
    InertOnMalfunction,
}

/// Catalog entry for an ammunition type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoType {
    /// Catalog key, e.g. "AC/10 Caseless Ammo"
    pub name: String,
    /// Weapon ammo kind this feeds, e.g. "AC/10"
    pub kind: String,
    #[serde(default)]
    pub munition: Munition,
    /// Damage per round when a bin detonates
    pub damage_per_shot: u32,
    #[serde(default)]
    pub flags: Vec<AmmoFlag>,
}

impl AmmoType {
    /// Check if ammo has a specific flag
    pub fn has_flag(&self, flag: AmmoFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn is_caseless(&self) -> bool {
        self.munition == Munition::Caseless
    }

    /// Standard explosive rounds
    pub fn standard(name: &str, kind: &str, damage_per_shot: u32) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            munition: Munition::Standard,
            damage_per_shot,
            flags: vec![AmmoFlag::Explosive],
        }
    }

    /// Caseless rounds: still explosive in the bin, inert on malfunction
    pub fn caseless(name: &str, kind: &str, damage_per_shot: u32) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            munition: Munition::Caseless,
            damage_per_shot,
            flags: vec![AmmoFlag::Explosive, AmmoFlag::InertOnMalfunction],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caseless_preset() {
        let ammo = AmmoType::caseless("AC/10 Caseless Ammo", "AC/10", 10);
        assert!(ammo.is_caseless());
        assert!(ammo.has_flag(AmmoFlag::InertOnMalfunction));
        assert!(ammo.has_flag(AmmoFlag::Explosive));
    }

    #[test]
    fn test_standard_preset() {
        let ammo = AmmoType::standard("AC/10 Ammo", "AC/10", 10);
        assert!(!ammo.is_caseless());
        assert!(!ammo.has_flag(AmmoFlag::InertOnMalfunction));
    }
}
