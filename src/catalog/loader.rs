//! Load the rule catalog from TOML files
//!
//! ```toml
//! [[weapon]]
//! name = "AC/10"
//! family = "autocannon"
//! damage = 10
//! heat = 3
//! ammo = "AC/10"
//!
//! [[ammo]]
//! name = "AC/10 Ammo"
//! kind = "AC/10"
//! damage_per_shot = 10
//! flags = ["explosive"]
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::catalog::{AmmoType, RuleCatalog, WeaponType};
use crate::core::error::CatalogError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    weapon: Vec<WeaponType>,
    #[serde(default)]
    ammo: Vec<AmmoType>,
}

/// Parse a catalog from TOML text
pub fn parse_catalog(content: &str) -> Result<RuleCatalog, CatalogError> {
    let file: CatalogFile = toml::from_str(content)?;

    let mut catalog = RuleCatalog::new();
    for weapon in file.weapon {
        catalog.insert_weapon(weapon)?;
    }
    for ammo in file.ammo {
        catalog.insert_ammo(ammo)?;
    }

    tracing::debug!(
        "Parsed catalog: {} weapon types, {} ammo types",
        catalog.weapon_count(),
        catalog.ammo_count()
    );

    Ok(catalog)
}

/// Load a catalog file from disk
pub fn load_catalog(path: &Path) -> Result<RuleCatalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;
    tracing::info!("Loaded rule catalog from {}", path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AmmoFlag, Munition, WeaponFamily};

    #[test]
    fn test_parse_minimal_catalog() {
        let catalog = parse_catalog(
            r#"
            [[weapon]]
            name = "Caseless AC/10"
            family = "caseless_autocannon"
            damage = 10
            heat = 3
            malfunction_threshold = 2
            ammo = "AC/10"

            [[ammo]]
            name = "AC/10 Caseless Ammo"
            kind = "AC/10"
            munition = "caseless"
            damage_per_shot = 10
            flags = ["explosive", "inert_on_malfunction"]
            "#,
        )
        .unwrap();

        let weapon = catalog.weapon("Caseless AC/10").unwrap();
        assert_eq!(weapon.family, WeaponFamily::CaselessAutocannon);
        assert_eq!(weapon.malfunction_threshold, Some(2));
        assert_eq!(weapon.rack_size, 1);

        let ammo = catalog.ammo("AC/10 Caseless Ammo").unwrap();
        assert_eq!(ammo.munition, Munition::Caseless);
        assert!(ammo.has_flag(AmmoFlag::InertOnMalfunction));
    }

    #[test]
    fn test_unsupported_rack_rejected() {
        let result = parse_catalog(
            r#"
            [[weapon]]
            name = "LRM 7"
            family = "missile"
            damage = 1
            heat = 3
            ammo = "LRM 7"
            rack_size = 7
            "#,
        );
        assert!(matches!(
            result,
            Err(CatalogError::UnsupportedRackSize { size: 7, .. })
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = parse_catalog(
            r#"
            [[weapon]]
            name = "Medium Laser"
            family = "energy"
            damage = 5
            heat = 3

            [[weapon]]
            name = "Medium Laser"
            family = "energy"
            damage = 5
            heat = 3
            "#,
        );
        assert!(matches!(result, Err(CatalogError::DuplicateType(_))));
    }

    #[test]
    fn test_bundled_catalog_matches_standard() {
        let bundled = parse_catalog(include_str!("../../data/catalog.toml")).unwrap();
        let standard = RuleCatalog::standard();

        assert_eq!(bundled.weapon_count(), standard.weapon_count());
        assert_eq!(bundled.ammo_count(), standard.ammo_count());
        for name in ["AC/10", "Caseless AC/10", "Ultra AC/5", "LRM 10", "Long Tom"] {
            assert_eq!(bundled.weapon(name).unwrap(), standard.weapon(name).unwrap());
        }
        assert_eq!(
            bundled.ammo("AC/10 Caseless Ammo").unwrap(),
            standard.ammo("AC/10 Caseless Ammo").unwrap()
        );
    }
}
