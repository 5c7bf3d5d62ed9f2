//! Static rule catalog
//!
//! Immutable lookup of weapon and ammunition properties. Loaded once at
//! startup and shared by reference for the rest of the session.

pub mod ammo;
pub mod cluster;
pub mod loader;
pub mod weapons;

pub use ammo::{AmmoFlag, AmmoType, Munition};
pub use loader::{load_catalog, parse_catalog};
pub use weapons::{WeaponFamily, WeaponType};

use ahash::AHashMap;

use crate::core::error::{CatalogError, GunneryError, Result};

/// Weapon and ammo types keyed by catalog name
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    weapons: AHashMap<String, WeaponType>,
    ammo: AHashMap<String, AmmoType>,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weapon type, validating it against the cluster table
    pub fn insert_weapon(&mut self, weapon: WeaponType) -> std::result::Result<(), CatalogError> {
        if self.weapons.contains_key(&weapon.name) {
            return Err(CatalogError::DuplicateType(weapon.name));
        }
        if weapon.family.uses_ammo() && weapon.ammo.is_none() {
            return Err(CatalogError::MissingAmmo(weapon.name));
        }
        if !cluster::supports(weapon.rack_size) {
            return Err(CatalogError::UnsupportedRackSize {
                size: weapon.rack_size,
                weapon: weapon.name,
            });
        }
        self.weapons.insert(weapon.name.clone(), weapon);
        Ok(())
    }

    pub fn insert_ammo(&mut self, ammo: AmmoType) -> std::result::Result<(), CatalogError> {
        if self.ammo.contains_key(&ammo.name) {
            return Err(CatalogError::DuplicateType(ammo.name));
        }
        self.ammo.insert(ammo.name.clone(), ammo);
        Ok(())
    }

    pub fn weapon(&self, name: &str) -> Result<&WeaponType> {
        self.weapons
            .get(name)
            .ok_or_else(|| GunneryError::UnknownWeaponType(name.to_string()))
    }

    pub fn ammo(&self, name: &str) -> Result<&AmmoType> {
        self.ammo
            .get(name)
            .ok_or_else(|| GunneryError::UnknownAmmoType(name.to_string()))
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    pub fn ammo_count(&self) -> usize {
        self.ammo.len()
    }

    /// Built-in catalog, mirrored by `data/catalog.toml`
    pub fn standard() -> Self {
        let weapons = [
            WeaponType::autocannon("AC/5", 5, 1),
            WeaponType::autocannon("AC/10", 10, 3),
            WeaponType::autocannon("Prototype AC/10", 10, 3)
                .with_malfunction_threshold(2)
                .with_ammo("AC/10"),
            WeaponType::autocannon("Caseless AC/10", 10, 3)
                .with_family(WeaponFamily::CaselessAutocannon)
                .with_malfunction_threshold(2)
                .with_ammo("AC/10"),
            WeaponType::autocannon("Ultra AC/5", 5, 1)
                .with_family(WeaponFamily::UltraAutocannon)
                .with_malfunction_threshold(2),
            WeaponType::energy("Medium Laser", 5, 3),
            WeaponType::energy("Large Laser", 8, 8),
            WeaponType::missile("LRM 10", 1, 4, 10, 5),
            WeaponType::missile("SRM 6", 2, 4, 6, 1),
            WeaponType::artillery("Long Tom", 20, 20, 10),
        ];
        let ammo = [
            AmmoType::standard("AC/5 Ammo", "AC/5", 5),
            AmmoType::standard("AC/10 Ammo", "AC/10", 10),
            AmmoType::caseless("AC/10 Caseless Ammo", "AC/10", 10),
            AmmoType::standard("Ultra AC/5 Ammo", "Ultra AC/5", 5),
            AmmoType::standard("LRM 10 Ammo", "LRM 10", 10),
            AmmoType::standard("SRM 6 Ammo", "SRM 6", 12),
            AmmoType::standard("Long Tom Ammo", "Long Tom", 20),
        ];

        let mut catalog = Self::new();
        for weapon in weapons {
            catalog.weapons.insert(weapon.name.clone(), weapon);
        }
        for ammo in ammo {
            catalog.ammo.insert(ammo.name.clone(), ammo);
        }
        catalog
    }
}
