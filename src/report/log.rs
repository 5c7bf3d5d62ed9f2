//! Append-only combat log
//!
//! The entry sequence is the engine's observable output: clients replay it
//! verbatim. Entries can only be appended; nothing hands out mutable access
//! to an entry already in the log.

use serde::Serialize;

use crate::report::Report;

/// Position in a log, used to slice off what a pass appended
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogMark(usize);

/// Ordered sequence of reports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CombatLog {
    entries: Vec<Report>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, report: Report) {
        self.entries.push(report);
    }

    /// Move every entry of `other` onto the end of this log, in order
    pub fn append_log(&mut self, other: CombatLog) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[Report] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Report> {
        self.entries.last()
    }

    /// Current end of the log
    pub fn mark(&self) -> LogMark {
        LogMark(self.entries.len())
    }

    /// Entries appended after `mark` was taken
    pub fn since(&self, mark: LogMark) -> &[Report] {
        &self.entries[mark.0.min(self.entries.len())..]
    }

    /// Entries emitted while resolving the attack with ordinal `attack_seq`
    pub fn for_attack(&self, attack_seq: u32) -> impl Iterator<Item = &Report> {
        self.entries.iter().filter(move |r| r.attack_seq == attack_seq)
    }

    /// Number of entries carrying `message_id`
    pub fn count(&self, message_id: u32) -> usize {
        self.entries.iter().filter(|r| r.message_id == message_id).count()
    }

    /// Is `self` a prefix of `other`?
    pub fn is_prefix_of(&self, other: &CombatLog) -> bool {
        other.entries.len() >= self.entries.len()
            && other.entries[..self.entries.len()] == self.entries[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::EntityId;
    use crate::report::{messages, Subject};

    fn report(id: u32) -> Report {
        Report::new(id, Subject::entity(EntityId(1)))
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = CombatLog::new();
        log.append(report(messages::WEAPON_JAMMED));
        log.append(report(messages::ATTACK_MISSES));
        log.append(report(messages::WEAPON_JAMMED));

        let ids: Vec<u32> = log.iter().map(|r| r.message_id).collect();
        assert_eq!(
            ids,
            vec![messages::WEAPON_JAMMED, messages::ATTACK_MISSES, messages::WEAPON_JAMMED]
        );
        assert_eq!(log.count(messages::WEAPON_JAMMED), 2);
    }

    #[test]
    fn test_mark_and_since() {
        let mut log = CombatLog::new();
        log.append(report(messages::ATTACK_HITS));
        let mark = log.mark();
        log.append(report(messages::ARMOR_DAMAGE));

        assert_eq!(log.since(mark).len(), 1);
        assert_eq!(log.since(mark)[0].message_id, messages::ARMOR_DAMAGE);
    }

    #[test]
    fn test_prefix_after_append() {
        let mut log = CombatLog::new();
        log.append(report(messages::ATTACK_HITS));
        let before = log.clone();

        let mut pass = CombatLog::new();
        pass.append(report(messages::HIT_LOCATION));
        log.append_log(pass);

        assert!(before.is_prefix_of(&log));
        assert!(!log.is_prefix_of(&before));
    }
}
