use serde::{Deserialize, Serialize};

use super::actor::{DeptId, UserId};
use super::clause::RuleClause;
use super::mode::Mode;

/// A stored authorization unit: a bundle of rule clauses scoping
/// visibility for a principal and/or a department.
///
/// Authored and edited elsewhere; read-only to this engine. An inactive
/// record, or one attached to an inactive department, never participates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionRecord {
    /// Human-readable label, used only in log events.
    pub name: String,
    pub is_active: bool,
    pub mode: Mode,
    pub rules: Vec<RuleClause>,
    #[serde(default)]
    pub user: Option<UserId>,
    #[serde(default)]
    pub dept: Option<DeptId>,
}

impl PermissionRecord {
    /// The combination mode actually used for this record's clauses.
    /// A single clause cannot meaningfully be "and"-combined, so
    /// single-clause records are always [`Mode::Or`] regardless of the
    /// stored mode.
    #[must_use]
    pub fn effective_mode(&self) -> Mode {
        if self.rules.len() == 1 {
            Mode::Or
        } else {
            self.mode
        }
    }
}
