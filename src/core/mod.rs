pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, RulesConfig};
pub use error::{GunneryError, Result};
pub use types::{AmmoBinId, EntityId, MountId, Turn};
