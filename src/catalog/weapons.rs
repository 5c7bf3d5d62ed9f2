//! Weapon type definitions
//!
//! A weapon type is static catalog data. Behaviour is keyed off the family;
//! the numbers (damage, heat, malfunction threshold) always come from here.

use serde::{Deserialize, Serialize};

/// Weapon families, one resolution strategy each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponFamily {
    /// Standard ballistic autocannon
    Autocannon,
    /// Autocannon built to fire caseless rounds
    CaselessAutocannon,
    /// Autocannon capable of rapid (double) fire
    UltraAutocannon,
    /// Lasers, PPCs: no ammunition
    Energy,
    /// Missile racks resolved on the cluster table
    Missile,
    /// Area-effect artillery
    Artillery,
}

impl WeaponFamily {
    /// Does this family draw rounds from an ammo bin?
    pub fn uses_ammo(&self) -> bool {
        !matches!(self, WeaponFamily::Energy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeaponFamily::Autocannon => "autocannon",
            WeaponFamily::CaselessAutocannon => "caseless autocannon",
            WeaponFamily::UltraAutocannon => "ultra autocannon",
            WeaponFamily::Energy => "energy",
            WeaponFamily::Missile => "missile",
            WeaponFamily::Artillery => "artillery",
        }
    }
}

fn one() -> u32 {
    1
}

/// Catalog entry for a weapon type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponType {
    /// Catalog key, e.g. "AC/10"
    pub name: String,
    pub family: WeaponFamily,
    /// Damage per projectile (per missile for racks)
    pub damage: u32,
    /// Heat generated each time the weapon fires
    pub heat: u32,
    /// Pre-fire 2d6 result at or below which the weapon malfunctions
    ///
    /// `None` means the weapon never rolls a pre-fire check.
    #[serde(default)]
    pub malfunction_threshold: Option<u32>,
    /// Ammo kind this weapon accepts; `None` for energy weapons
    #[serde(default)]
    pub ammo: Option<String>,
    /// Projectiles per volley (cluster table column)
    #[serde(default = "one")]
    pub rack_size: u32,
    /// Projectiles grouped under one hit-location roll
    #[serde(default = "one")]
    pub cluster_group: u32,
    /// Damage to entities sharing the target's area (artillery)
    #[serde(default)]
    pub splash_damage: u32,
}

impl WeaponType {
    /// Does this weapon accept ammo of the given kind?
    pub fn accepts(&self, ammo_kind: &str) -> bool {
        self.ammo.as_deref() == Some(ammo_kind)
    }

    pub fn autocannon(name: &str, damage: u32, heat: u32) -> Self {
        Self {
            name: name.into(),
            family: WeaponFamily::Autocannon,
            damage,
            heat,
            malfunction_threshold: None,
            ammo: Some(name.into()),
            rack_size: 1,
            cluster_group: 1,
            splash_damage: 0,
        }
    }

    pub fn energy(name: &str, damage: u32, heat: u32) -> Self {
        Self {
            name: name.into(),
            family: WeaponFamily::Energy,
            damage,
            heat,
            malfunction_threshold: None,
            ammo: None,
            rack_size: 1,
            cluster_group: 1,
            splash_damage: 0,
        }
    }

    pub fn missile(name: &str, damage: u32, heat: u32, rack_size: u32, cluster_group: u32) -> Self {
        Self {
            name: name.into(),
            family: WeaponFamily::Missile,
            damage,
            heat,
            malfunction_threshold: None,
            ammo: Some(name.into()),
            rack_size,
            cluster_group,
            splash_damage: 0,
        }
    }

    pub fn artillery(name: &str, damage: u32, heat: u32, splash_damage: u32) -> Self {
        Self {
            name: name.into(),
            family: WeaponFamily::Artillery,
            damage,
            heat,
            malfunction_threshold: None,
            ammo: Some(name.into()),
            rack_size: 1,
            cluster_group: 1,
            splash_damage,
        }
    }

    /// Change the family, keeping the numbers
    pub fn with_family(mut self, family: WeaponFamily) -> Self {
        self.family = family;
        self
    }

    pub fn with_malfunction_threshold(mut self, threshold: u32) -> Self {
        self.malfunction_threshold = Some(threshold);
        self
    }

    pub fn with_ammo(mut self, kind: &str) -> Self {
        self.ammo = Some(kind.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_needs_no_ammo() {
        assert!(!WeaponFamily::Energy.uses_ammo());
        assert!(WeaponFamily::Autocannon.uses_ammo());
        assert!(WeaponFamily::Missile.uses_ammo());
    }

    #[test]
    fn test_accepts_matching_kind() {
        let ac = WeaponType::autocannon("AC/10", 10, 3);
        assert!(ac.accepts("AC/10"));
        assert!(!ac.accepts("AC/5"));

        let laser = WeaponType::energy("Medium Laser", 5, 3);
        assert!(!laser.accepts("AC/10"));
    }

    #[test]
    fn test_builder_overrides() {
        let caseless = WeaponType::autocannon("Caseless AC/10", 10, 3)
            .with_family(WeaponFamily::CaselessAutocannon)
            .with_malfunction_threshold(2)
            .with_ammo("AC/10");
        assert_eq!(caseless.family, WeaponFamily::CaselessAutocannon);
        assert_eq!(caseless.malfunction_threshold, Some(2));
        assert!(caseless.accepts("AC/10"));
    }
}
