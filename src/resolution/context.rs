//! Per-pass resolution context
//!
//! Bundles the explicit handles a pass works through: mutable state, the
//! read-only catalog and rules, the injected roller and the output log.
//! Every roll goes through `roll`, which validates the total and records it
//! so the pass can prove each roll was either reported or deliberately
//! silent.

use crate::catalog::{AmmoType, RuleCatalog, WeaponType};
use crate::core::config::RulesConfig;
use crate::core::error::{GunneryError, Result};
use crate::core::types::EntityId;
use crate::dice::{Dice, DiceRoller, RollPurpose};
use crate::game::GameState;
use crate::report::{CombatLog, Report, Subject};
use crate::resolution::attack::AttackDescriptor;
use crate::resolution::outcome::{RollDisposition, RollRecord};

/// A validated roll made in this pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    index: usize,
    pub value: u32,
}

pub struct ResolutionContext<'a> {
    pub state: &'a mut GameState,
    pub catalog: &'a RuleCatalog,
    pub rules: &'a RulesConfig,
    pub attack: &'a AttackDescriptor,
    roller: &'a mut dyn DiceRoller,
    log: &'a mut CombatLog,
    attack_seq: u32,
    rolls: Vec<RollRecord>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(
        state: &'a mut GameState,
        catalog: &'a RuleCatalog,
        rules: &'a RulesConfig,
        attack: &'a AttackDescriptor,
        roller: &'a mut dyn DiceRoller,
        log: &'a mut CombatLog,
        attack_seq: u32,
    ) -> Self {
        Self {
            state,
            catalog,
            rules,
            attack,
            roller,
            log,
            attack_seq,
            rolls: Vec::new(),
        }
    }

    pub fn attack_seq(&self) -> u32 {
        self.attack_seq
    }

    /// Roll dice, rejecting totals the dice cannot produce
    pub fn roll(&mut self, purpose: RollPurpose, dice: Dice) -> Result<Roll> {
        let value = self.roller.roll(dice)?;
        if !dice.contains(value) {
            tracing::error!(?purpose, %dice, value, "Roller returned out-of-range total");
            return Err(GunneryError::RollOutOfRange {
                purpose,
                dice,
                value,
            });
        }
        tracing::trace!(?purpose, %dice, value, "Roll");
        self.rolls.push(RollRecord {
            purpose,
            dice,
            value,
            disposition: RollDisposition::Pending,
        });
        Ok(Roll {
            index: self.rolls.len() - 1,
            value,
        })
    }

    /// Classify a roll as one the log deliberately omits
    pub fn silent(&mut self, roll: Roll) {
        self.rolls[roll.index].disposition = RollDisposition::Silent;
    }

    /// Append a report tagged with this pass's ordinal
    pub fn report(&mut self, mut report: Report) {
        report.attack_seq = self.attack_seq;
        self.log.append(report);
    }

    /// Append a report that accounts for `roll`
    pub fn report_roll(&mut self, report: Report, roll: Roll) {
        self.rolls[roll.index].disposition = RollDisposition::Reported;
        self.report(report);
    }

    /// The firing mount, as a report subject
    pub fn weapon_subject(&self) -> Subject {
        Subject::mount(self.attack.attacker, self.attack.mount)
    }

    /// Catalog entry of the firing weapon
    pub fn weapon(&self) -> Result<&'a WeaponType> {
        let catalog = self.catalog;
        let mount = self.state.mount(self.attack.attacker, self.attack.mount)?;
        catalog.weapon(&mount.weapon_type)
    }

    /// Catalog entry of the loaded ammunition, if any
    pub fn ammo(&self) -> Result<Option<&'a AmmoType>> {
        let catalog = self.catalog;
        match self.attack.ammo {
            Some(bin) => {
                let bin = self.state.bin(self.attack.attacker, bin)?;
                catalog.ammo(&bin.ammo_type).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Rounds left in the loaded bin; zero when nothing is loaded
    pub fn rounds_available(&self) -> Result<u32> {
        match self.attack.ammo {
            Some(bin) => Ok(self.state.bin(self.attack.attacker, bin)?.rounds),
            None => Ok(0),
        }
    }

    pub fn entity_name(&self, id: EntityId) -> Result<String> {
        Ok(self.state.entity(id)?.name.clone())
    }

    /// "Atlas's AC/10" style label for reports
    pub fn weapon_label(&self) -> Result<String> {
        let attacker = self.state.entity(self.attack.attacker)?;
        let weapon = self.weapon()?;
        Ok(format!("{}'s {}", attacker.name, weapon.name))
    }

    /// Close the pass and hand back its roll transcript
    pub fn finish(self) -> Vec<RollRecord> {
        for record in &self.rolls {
            if record.disposition == RollDisposition::Pending {
                tracing::warn!(
                    purpose = ?record.purpose,
                    value = record.value,
                    attack_seq = self.attack_seq,
                    "Roll left unreported"
                );
            }
        }
        self.rolls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{AmmoBinId, MountId};
    use crate::dice::ScriptedRoller;
    use crate::game::{AmmoBin, Entity, Location, WeaponMount};
    use crate::report::messages;

    fn fixture() -> (GameState, RuleCatalog, RulesConfig, AttackDescriptor) {
        let atlas = Entity::test_mech(EntityId(1), "Atlas")
            .with_mount(WeaponMount::new(MountId(1), "AC/10", Location::RightTorso))
            .with_bin(AmmoBin::new(AmmoBinId(1), "AC/10 Ammo", Location::RightTorso, 4));
        let state = GameState::from_entities([atlas, Entity::test_mech(EntityId(2), "Locust")]);
        let attack =
            AttackDescriptor::new(EntityId(1), EntityId(2), MountId(1), 8).with_ammo(AmmoBinId(1));
        (state, RuleCatalog::standard(), RulesConfig::default(), attack)
    }

    #[test]
    fn test_roll_out_of_range_is_fatal() {
        let (mut state, catalog, rules, attack) = fixture();
        let mut roller = ScriptedRoller::new([13]);
        let mut log = CombatLog::new();
        let mut ctx =
            ResolutionContext::new(&mut state, &catalog, &rules, &attack, &mut roller, &mut log, 0);

        let err = ctx.roll(RollPurpose::ToHit, Dice::TWO_D6).unwrap_err();
        assert!(matches!(
            err,
            GunneryError::RollOutOfRange { value: 13, purpose: RollPurpose::ToHit, .. }
        ));
        assert!(ctx.finish().is_empty());
    }

    #[test]
    fn test_roll_dispositions() {
        let (mut state, catalog, rules, attack) = fixture();
        let mut roller = ScriptedRoller::new([7, 9]);
        let mut log = CombatLog::new();
        let rolls = {
            let mut ctx = ResolutionContext::new(
                &mut state, &catalog, &rules, &attack, &mut roller, &mut log, 3,
            );
            let first = ctx.roll(RollPurpose::PreFire, Dice::TWO_D6).unwrap();
            ctx.silent(first);
            let second = ctx.roll(RollPurpose::ToHit, Dice::TWO_D6).unwrap();
            ctx.report_roll(Report::new(messages::ATTACK_HITS, ctx.weapon_subject()), second);
            ctx.finish()
        };

        assert_eq!(rolls[0].disposition, RollDisposition::Silent);
        assert_eq!(rolls[1].disposition, RollDisposition::Reported);
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].attack_seq, 3);
    }

    #[test]
    fn test_lookups() {
        let (mut state, catalog, rules, attack) = fixture();
        let mut roller = ScriptedRoller::new(Vec::<u32>::new());
        let mut log = CombatLog::new();
        let ctx =
            ResolutionContext::new(&mut state, &catalog, &rules, &attack, &mut roller, &mut log, 0);

        assert_eq!(ctx.weapon().unwrap().name, "AC/10");
        assert_eq!(ctx.ammo().unwrap().map(|a| a.name.as_str()), Some("AC/10 Ammo"));
        assert_eq!(ctx.rounds_available().unwrap(), 4);
        assert_eq!(ctx.weapon_label().unwrap(), "Atlas's AC/10");
    }
}
