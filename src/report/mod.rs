//! Combat log reports
//!
//! A report is a message id plus the values its template needs. Text is
//! rendered late, by whoever displays the log.

pub mod log;
pub mod messages;

pub use log::{CombatLog, LogMark};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{EntityId, MountId};

/// Value substituted into a template placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Int(n) => write!(f, "{}", n),
            ReportValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u32> for ReportValue {
    fn from(n: u32) -> Self {
        ReportValue::Int(n as i64)
    }
}

impl From<i32> for ReportValue {
    fn from(n: i32) -> Self {
        ReportValue::Int(n as i64)
    }
}

impl From<&str> for ReportValue {
    fn from(s: &str) -> Self {
        ReportValue::Text(s.to_string())
    }
}

impl From<String> for ReportValue {
    fn from(s: String) -> Self {
        ReportValue::Text(s)
    }
}

/// Entity (and optionally weapon) a report is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub entity: EntityId,
    pub mount: Option<MountId>,
}

impl Subject {
    pub fn entity(entity: EntityId) -> Self {
        Self {
            entity,
            mount: None,
        }
    }

    pub fn mount(entity: EntityId, mount: MountId) -> Self {
        Self {
            entity,
            mount: Some(mount),
        }
    }
}

/// One combat log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub message_id: u32,
    pub subject: Subject,
    /// Ordinal of the attack within its phase, for client-side grouping
    pub attack_seq: u32,
    /// Nesting depth under the attack's first line
    pub indent: u8,
    pub data: Vec<ReportValue>,
}

impl Report {
    pub fn new(message_id: u32, subject: Subject) -> Self {
        Self {
            message_id,
            subject,
            attack_seq: 0,
            indent: 0,
            data: Vec::new(),
        }
    }

    pub fn indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Append a template value
    pub fn add(mut self, value: impl Into<ReportValue>) -> Self {
        self.data.push(value.into());
        self
    }

    /// Render through the English template table
    pub fn render(&self) -> String {
        let Some(template) = messages::template(self.message_id) else {
            return format!("[message {}]", self.message_id);
        };

        let mut out = String::with_capacity(template.len() + 16);
        let mut values = self.data.iter();
        let mut rest = template;
        while let Some(pos) = rest.find("<data>") {
            out.push_str(&rest[..pos]);
            match values.next() {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push('?'),
            }
            rest = &rest[pos + "<data>".len()..];
        }
        out.push_str(rest);

        format!("{}{}", "  ".repeat(self.indent as usize), out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_placeholders_in_order() {
        let report = Report::new(messages::ATTACK_MISSES, Subject::entity(EntityId(1)))
            .add("Atlas")
            .add("Locust")
            .add(8u32)
            .add(5u32);
        assert_eq!(report.render(), "Atlas misses Locust (needs 8, rolls 5).");
    }

    #[test]
    fn test_render_indent_and_missing_values() {
        let report =
            Report::new(messages::WEAPON_JAMMED, Subject::entity(EntityId(1))).indent(1);
        assert_eq!(report.render(), "  ? jams!");
    }

    #[test]
    fn test_render_unknown_id() {
        let report = Report::new(42, Subject::entity(EntityId(1)));
        assert_eq!(report.render(), "[message 42]");
    }
}
