//! Dice rolling
//!
//! The roller is the only source of nondeterminism in the engine. It is an
//! injected capability: production code uses a seeded ChaCha roller fixed
//! once per session, tests script the exact totals they want.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::core::error::{GunneryError, Result};

/// A homogeneous pool of dice, e.g. 2d6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    pub count: u32,
    pub sides: u32,
}

impl Dice {
    /// The standard 2d6 roll used for to-hit, locations and criticals
    pub const TWO_D6: Dice = Dice { count: 2, sides: 6 };

    /// A single die with `sides` faces
    pub fn d(sides: u32) -> Self {
        Self { count: 1, sides }
    }

    /// Smallest possible total
    pub fn min(&self) -> u32 {
        self.count
    }

    /// Largest possible total
    pub fn max(&self) -> u32 {
        self.count * self.sides
    }

    /// Whether `value` is a total these dice can produce
    pub fn contains(&self, value: u32) -> bool {
        self.count > 0 && self.sides > 0 && (self.min()..=self.max()).contains(&value)
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Why a roll was made; every roll in a resolution pass carries one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollPurpose {
    /// Malfunction check before the weapon fires
    PreFire,
    ToHit,
    HitLocation,
    /// Cluster table roll for multi-projectile weapons
    Cluster,
    CriticalCheck,
    /// Picks which occupied slot a critical hit lands in
    CriticalSlot,
}

/// Source of dice totals
pub trait DiceRoller {
    /// Roll `dice` and return the total.
    ///
    /// Implementations are not trusted to stay in range; the resolution
    /// context validates every value it receives.
    fn roll(&mut self, dice: Dice) -> Result<u32>;
}

/// Session roller backed by ChaCha8, replayable from its seed
#[derive(Debug, Clone)]
pub struct SeededRoller {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a roller with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this roller was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceRoller for SeededRoller {
    fn roll(&mut self, dice: Dice) -> Result<u32> {
        let total = (0..dice.count)
            .map(|_| self.rng.gen_range(1..=dice.sides.max(1)))
            .sum();
        Ok(total)
    }
}

/// Roller that replays a fixed list of totals, in order
///
/// Totals are returned verbatim whatever dice are asked for, so a script can
/// feed an out-of-range value to exercise validation.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    script: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedRoller {
    pub fn new(totals: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: totals.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Rolls not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Rolls handed out so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl DiceRoller for ScriptedRoller {
    fn roll(&mut self, _dice: Dice) -> Result<u32> {
        let total = self.script.pop_front().ok_or(GunneryError::EmptyRollScript)?;
        self.consumed += 1;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_range() {
        assert_eq!(Dice::TWO_D6.min(), 2);
        assert_eq!(Dice::TWO_D6.max(), 12);
        assert!(Dice::TWO_D6.contains(7));
        assert!(!Dice::TWO_D6.contains(1));
        assert!(!Dice::TWO_D6.contains(13));
        assert!(Dice::d(4).contains(4));
    }

    #[test]
    fn test_dice_display() {
        assert_eq!(Dice::TWO_D6.to_string(), "2d6");
        assert_eq!(Dice::d(3).to_string(), "1d3");
    }

    #[test]
    fn test_seeded_roller_stays_in_range() {
        let mut roller = SeededRoller::new(42);
        for _ in 0..500 {
            let total = roller.roll(Dice::TWO_D6).unwrap();
            assert!(Dice::TWO_D6.contains(total));
        }
    }

    #[test]
    fn test_seeded_roller_replays() {
        let mut a = SeededRoller::new(7);
        let mut b = SeededRoller::new(7);
        let first: Vec<u32> = (0..20).map(|_| a.roll(Dice::TWO_D6).unwrap()).collect();
        let second: Vec<u32> = (0..20).map(|_| b.roll(Dice::TWO_D6).unwrap()).collect();
        assert_eq!(first, second);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_scripted_roller_order_and_exhaustion() {
        let mut roller = ScriptedRoller::new([2, 7, 12]);
        assert_eq!(roller.roll(Dice::TWO_D6).unwrap(), 2);
        assert_eq!(roller.roll(Dice::d(6)).unwrap(), 7);
        assert_eq!(roller.remaining(), 1);
        assert_eq!(roller.roll(Dice::TWO_D6).unwrap(), 12);
        assert_eq!(roller.consumed(), 3);
        assert!(matches!(
            roller.roll(Dice::TWO_D6),
            Err(GunneryError::EmptyRollScript)
        ));
    }
}
