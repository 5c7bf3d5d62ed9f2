//! Game state: entities, their equipment and the firing phase

pub mod entity;
pub mod location;
pub mod mount;
pub mod phase;
pub mod scenario;
pub mod state;

pub use entity::Entity;
pub use location::{Location, LocationState};
pub use mount::{AmmoBin, CritSlot, WeaponMount};
pub use phase::{PhaseSummary, ResolvedAttack};
pub use scenario::Scenario;
pub use state::{DamageMode, DamageResult, GameState};
