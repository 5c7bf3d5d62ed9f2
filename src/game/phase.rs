//! Firing phase driver
//!
//! Drains the declared-attack queue one attack at a time, in declaration
//! order. Later attacks see what earlier ones did: a target killed by the
//! first attack is already destroyed when the second resolves. Weapon fire
//! is simultaneous, so an attacker destroyed earlier in the turn still
//! fires; a unit destroyed in an earlier turn is a wreck and does not.

use serde::Serialize;

use crate::catalog::RuleCatalog;
use crate::core::config::RulesConfig;
use crate::core::error::Result;
use crate::dice::DiceRoller;
use crate::game::GameState;
use crate::report::Report;
use crate::resolution::{AttackDescriptor, PassResult, Resolver};

/// One attack and how it ended
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedAttack {
    pub attack: AttackDescriptor,
    pub result: PassResult,
}

/// Everything a firing phase produced
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSummary {
    pub turn: u32,
    pub attacks: Vec<ResolvedAttack>,
    /// Reports appended during this phase, in order
    pub reports: Vec<Report>,
}

impl GameState {
    /// Resolve every queued attack
    ///
    /// An invalid attack or roll stops the drain and is returned. Attacks
    /// behind it stay queued and anything already applied stays applied.
    pub fn resolve_phase(
        &mut self,
        catalog: &RuleCatalog,
        rules: &RulesConfig,
        roller: &mut dyn DiceRoller,
    ) -> Result<PhaseSummary> {
        let resolver = Resolver::new(catalog, rules);
        let mut log = std::mem::take(&mut self.log);
        let mark = log.mark();
        let mut attacks = Vec::with_capacity(self.queue.len());

        tracing::info!(turn = self.turn, queued = self.queue.len(), "Resolving firing phase");

        let drained = loop {
            let Some(attack) = self.queue.pop_front() else {
                break Ok(());
            };
            let seq = self.next_attack_seq;
            self.next_attack_seq += 1;

            match resolver.resolve(self, roller, &attack, seq, &mut log) {
                Ok(result) => attacks.push(ResolvedAttack { attack, result }),
                Err(e) => {
                    tracing::error!(seq, error = %e, "Resolution pass failed");
                    break Err(e);
                }
            }
        };

        let reports = log.since(mark).to_vec();
        self.log = log;
        drained?;

        tracing::info!(
            turn = self.turn,
            resolved = attacks.len(),
            reports = reports.len(),
            "Firing phase complete"
        );
        Ok(PhaseSummary {
            turn: self.turn,
            attacks,
            reports,
        })
    }

    /// Close the turn: clear per-turn heat and shot counters
    ///
    /// Jams and weapon damage carry over.
    pub fn end_turn(&mut self) {
        self.clear_turn_accrual();
        self.next_attack_seq = 0;
        self.turn += 1;
        tracing::debug!(turn = self.turn, "Turn ended");
    }
}
