//! Load a firing-phase scenario from JSON
//!
//! A scenario lists the entities on the field and the attacks declared
//! against them. Declaring goes through `GameState::declare_attack`, so a
//! scenario with unknown ids fails to load instead of failing mid-phase.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::RuleCatalog;
use crate::core::error::Result;
use crate::game::{Entity, GameState};
use crate::resolution::AttackDescriptor;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub attacks: Vec<AttackDescriptor>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let scenario = Self::from_json(&content)?;
        tracing::info!(
            "Loaded scenario from {}: {} entities, {} attacks",
            path.display(),
            scenario.entities.len(),
            scenario.attacks.len()
        );
        Ok(scenario)
    }

    /// Build the game state and queue every attack
    pub fn into_state(self, catalog: &RuleCatalog) -> Result<GameState> {
        let mut state = GameState::from_entities(self.entities);
        for attack in self.attacks {
            state.declare_attack(attack, catalog)?;
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GunneryError;
    use crate::core::types::EntityId;

    #[test]
    fn test_bundled_duel_loads() {
        let scenario = Scenario::from_json(include_str!("../../data/scenarios/duel.json")).unwrap();
        let state = scenario.into_state(&RuleCatalog::standard()).unwrap();
        assert_eq!(state.entities().len(), 2);
        assert!(state.pending_count() > 0);
        assert_eq!(state.entity(EntityId(1)).unwrap().name, "Atlas");
    }

    #[test]
    fn test_unknown_target_fails_load() {
        let mut scenario =
            Scenario::from_json(include_str!("../../data/scenarios/duel.json")).unwrap();
        scenario.attacks[0].target = EntityId(99);
        assert!(matches!(
            scenario.into_state(&RuleCatalog::standard()),
            Err(GunneryError::UnknownEntity(EntityId(99)))
        ));
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(matches!(
            Scenario::from_json("{\"entities\": 3}"),
            Err(GunneryError::SerdeError(_))
        ));
    }
}
