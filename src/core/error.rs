//! Error taxonomy
//!
//! Everything here is an integration failure: an upstream collaborator handed
//! the engine something it cannot resolve. Game-rule outcomes (misses, jams,
//! empty bins) are never errors; they come back as `ResolutionOutcome`.

use thiserror::Error;

use crate::core::types::{AmmoBinId, EntityId, MountId};
use crate::dice::{Dice, RollPurpose};

#[derive(Error, Debug)]
pub enum GunneryError {
    #[error("Entity not found: {0}")]
    UnknownEntity(EntityId),

    #[error("Weapon mount {mount:?} not found on entity {entity}")]
    UnknownMount { entity: EntityId, mount: MountId },

    #[error("Ammo bin {bin:?} not found on entity {entity}")]
    UnknownAmmoBin { entity: EntityId, bin: AmmoBinId },

    #[error("Weapon type not in catalog: {0}")]
    UnknownWeaponType(String),

    #[error("Ammo type not in catalog: {0}")]
    UnknownAmmoType(String),

    #[error("Ammo '{ammo}' cannot feed weapon '{weapon}'")]
    AmmoMismatch { weapon: String, ammo: String },

    #[error("{purpose:?} roll of {value} is outside {dice}")]
    RollOutOfRange {
        purpose: RollPurpose,
        dice: Dice,
        value: u32,
    },

    #[error("Scripted roller ran out of rolls")]
    EmptyRollScript,

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Errors raised while loading the static rule catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate catalog entry: {0}")]
    DuplicateType(String),

    #[error("Weapon '{weapon}' has rack size {size} with no cluster table column")]
    UnsupportedRackSize { weapon: String, size: u32 },

    #[error("Weapon '{0}' is ammo-fed but declares no ammo kind")]
    MissingAmmo(String),
}

/// Errors raised while loading engine configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid rules: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, GunneryError>;
