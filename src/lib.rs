//! Mech Gunnery - weapon attack resolution engine
//!
//! Resolves declared weapon attacks through a shared four-step protocol
//! with per-family overrides, drawing every roll from an injected, seedable
//! roller and recording each decision in an append-only combat log.

pub mod catalog;
pub mod core;
pub mod dice;
pub mod game;
pub mod report;
pub mod resolution;
