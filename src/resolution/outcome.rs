//! Terminal results of a resolution pass

use serde::{Deserialize, Serialize};

use crate::dice::{Dice, RollPurpose};

/// The four steps every weapon family runs through
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResolutionStage {
    PreFire,
    ToHit,
    DamageCalculation,
    DamageApplication,
}

/// Why a weapon never got to roll to hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreemptReason {
    /// Pre-fire roll jammed or damaged the weapon
    Malfunction,
    OutOfAmmo,
    /// Jammed in an earlier pass
    WeaponJammed,
    /// Hit in an earlier pass
    WeaponDestroyed,
    /// The firing unit was destroyed in an earlier turn
    AttackerDestroyed,
}

/// Why a pass stopped after the weapon fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbortReason {
    TargetDestroyed,
}

/// How a single attack ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionOutcome {
    /// Attack hit; `hits` damage packets totalling `damage` were applied
    Hit { hits: u32, damage: u32 },
    Miss,
    /// Stopped during the pre-fire check; no to-hit roll was made
    PreEmpted { reason: PreemptReason },
    Aborted {
        stage: ResolutionStage,
        reason: AbortReason,
    },
}

impl ResolutionOutcome {
    pub fn is_preempted(&self) -> bool {
        matches!(self, ResolutionOutcome::PreEmpted { .. })
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, ResolutionOutcome::Hit { .. })
    }

    /// Last step the pass reached
    pub fn stage(&self) -> ResolutionStage {
        match self {
            ResolutionOutcome::Hit { .. } => ResolutionStage::DamageApplication,
            ResolutionOutcome::Miss => ResolutionStage::ToHit,
            ResolutionOutcome::PreEmpted { .. } => ResolutionStage::PreFire,
            ResolutionOutcome::Aborted { stage, .. } => *stage,
        }
    }
}

/// Whether a roll ended up in the combat log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollDisposition {
    /// Not yet attached to a report
    Pending,
    Reported,
    /// Deliberately unlogged (a pre-fire check that passed)
    Silent,
}

/// One roll made during a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    pub purpose: RollPurpose,
    pub dice: Dice,
    pub value: u32,
    pub disposition: RollDisposition,
}

/// Everything a pass returns besides its log entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassResult {
    pub attack_seq: u32,
    pub outcome: ResolutionOutcome,
    /// Rolls in the order they were made
    pub rolls: Vec<RollRecord>,
}

impl PassResult {
    /// Rolls the log does not mention
    pub fn silent_rolls(&self) -> impl Iterator<Item = &RollRecord> {
        self.rolls
            .iter()
            .filter(|r| r.disposition != RollDisposition::Reported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_of_each_outcome() {
        assert_eq!(ResolutionOutcome::Miss.stage(), ResolutionStage::ToHit);
        assert_eq!(
            ResolutionOutcome::PreEmpted {
                reason: PreemptReason::OutOfAmmo
            }
            .stage(),
            ResolutionStage::PreFire
        );
        assert_eq!(
            ResolutionOutcome::Hit { hits: 1, damage: 10 }.stage(),
            ResolutionStage::DamageApplication
        );
    }

    #[test]
    fn test_stages_are_ordered() {
        assert!(ResolutionStage::PreFire < ResolutionStage::ToHit);
        assert!(ResolutionStage::DamageCalculation < ResolutionStage::DamageApplication);
    }
}
