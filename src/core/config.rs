//! Engine configuration with documented rule constants
//!
//! Tunable rule values live here rather than being scattered through the
//! resolution code. Catalog data (per weapon and ammo type) does not: that
//! comes from the rule catalog.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::ConfigError;

/// Top-level engine configuration, usually loaded from `gunnery.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Session seed for the dice roller
    ///
    /// Fixed once per game session. `None` draws a seed from entropy; the
    /// chosen seed is logged so the session can still be replayed.
    pub seed: Option<u64>,

    pub rules: RulesConfig,

    pub log: LogConfig,
}

/// Rule switches and thresholds consulted during resolution
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// 2d6 result at or above which structure damage scores critical hits
    ///
    /// 8-9 scores one critical, 10-11 two, 12 three. Raising this makes
    /// internal damage less likely to knock out equipment.
    pub critical_threshold: u32,

    /// Whether critical hits on loaded explosive bins detonate them
    pub ammo_explosions: bool,

    /// Whether damage past a destroyed location moves inward
    ///
    /// With this off, excess damage on a destroyed location is lost.
    pub transfer_damage: bool,

    /// Artillery damage is applied in groups of this many points
    ///
    /// Each group rolls its own hit location.
    pub artillery_cluster: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            critical_threshold: 8,
            ammo_explosions: true,
            transfer_damage: true,
            artillery_cluster: 5,
        }
    }
}

/// Logging configuration for the binary
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber` env-filter directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "mech_gunnery=info".into(),
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.rules.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

impl RulesConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if !(2..=12).contains(&self.critical_threshold) {
            return Err(format!(
                "critical_threshold ({}) must be a possible 2d6 result",
                self.critical_threshold
            ));
        }

        if self.artillery_cluster == 0 {
            return Err("artillery_cluster must be positive".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::new();
        assert!(config.rules.validate().is_ok());
        assert!(config.seed.is_none());
        assert_eq!(config.log.filter, "mech_gunnery=info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            seed = 99
            [rules]
            ammo_explosions = false
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(99));
        assert!(!config.rules.ammo_explosions);
        assert_eq!(config.rules.critical_threshold, 8);
        assert!(config.rules.transfer_damage);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let rules = RulesConfig {
            critical_threshold: 13,
            ..RulesConfig::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_invalid_rules_in_toml_rejected() {
        let result = EngineConfig::from_toml("[rules]\nartillery_cluster = 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(EngineConfig::from_toml("seed = \"abc\"").is_err());
    }
}
