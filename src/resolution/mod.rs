//! Weapon attack resolution
//!
//! A declared attack goes through the shared protocol in `protocol`, with
//! per-family behavior dispatched through `WeaponHandler`. The pass reads
//! the catalog, mutates the game state through its mutators, draws every
//! roll from the injected roller and appends its reports to the log it is
//! handed.

pub mod attack;
pub mod context;
pub mod damage;
pub mod families;
pub mod handler;
pub mod outcome;
pub mod protocol;

pub use attack::{AttackContext, AttackDescriptor, RangeBand, ToHitData, ToHitModifier};
pub use context::{ResolutionContext, Roll};
pub use damage::DamagePacket;
pub use handler::{PreFire, WeaponHandler};
pub use outcome::{
    AbortReason, PassResult, PreemptReason, ResolutionOutcome, ResolutionStage, RollDisposition,
    RollRecord,
};
pub use protocol::Resolver;
