use std::fmt;

use serde::{Deserialize, Serialize};

/// Target identifier matching any collection.
pub const WILDCARD: &str = "*";

/// Comparison operator a clause declares against a row field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Match {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Membership of the row value in a list operand. Forced onto the
    /// hierarchical clause kinds during resolution.
    In,
    /// Matches every row. Forced onto `value.all` clauses during resolution.
    All,
}

/// Typed value-reference namespace for clause operands.
///
/// A closed enumeration dispatched by pattern match; the wire tags are the
/// `value.*` strings shown on each variant. Any unrecognized tag
/// deserializes to [`ClauseKind::Text`], whose raw stored value is
/// compared unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClauseKind {
    /// `value.user.id`: the principal's own id.
    UserId,
    /// `value.user.dept.id`: the principal's department id.
    UserDeptId,
    /// `value.user.dept.ids`: the principal's department id plus every
    /// descendant department id.
    UserDeptIds,
    /// `value.dept.ids`: descendants of the department id(s) stored as the
    /// JSON-encoded operand.
    DeptIds,
    /// `value.all`: the unconditional "all data" dominance marker.
    All,
    /// `value.date`: now plus the JSON-encoded signed second offset.
    DateOffset,
    /// `value.json`: an arbitrary JSON-encoded literal.
    Json,
    /// `value.text` (or any unrecognized tag): the raw stored value.
    Text,
}

impl ClauseKind {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            ClauseKind::UserId => "value.user.id",
            ClauseKind::UserDeptId => "value.user.dept.id",
            ClauseKind::UserDeptIds => "value.user.dept.ids",
            ClauseKind::DeptIds => "value.dept.ids",
            ClauseKind::All => "value.all",
            ClauseKind::DateOffset => "value.date",
            ClauseKind::Json => "value.json",
            ClauseKind::Text => "value.text",
        }
    }
}

impl From<String> for ClauseKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "value.user.id" => ClauseKind::UserId,
            "value.user.dept.id" => ClauseKind::UserDeptId,
            "value.user.dept.ids" => ClauseKind::UserDeptIds,
            "value.dept.ids" => ClauseKind::DeptIds,
            "value.all" => ClauseKind::All,
            "value.date" => ClauseKind::DateOffset,
            "value.json" => ClauseKind::Json,
            _ => ClauseKind::Text,
        }
    }
}

impl From<ClauseKind> for String {
    fn from(kind: ClauseKind) -> Self {
        kind.tag().to_owned()
    }
}

/// One typed condition within a permission record.
///
/// Immutable once loaded; resolution builds new values rather than
/// rewriting the stored clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleClause {
    /// Fully-qualified `app.model` target, or [`WILDCARD`].
    pub table: String,
    /// Row field path the resolved operand is compared against.
    pub field: String,
    #[serde(rename = "type")]
    pub kind: ClauseKind,
    #[serde(rename = "match")]
    pub match_op: Match,
    /// Raw stored operand; JSON-encoded for the kinds that decode it.
    #[serde(default)]
    pub value: String,
}

impl RuleClause {
    /// Whether this clause targets the given collection.
    #[must_use]
    pub fn applies_to(&self, target: &str) -> bool {
        self.table == target || self.table == WILDCARD
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Match::Eq => write!(f, "=="),
            Match::Ne => write!(f, "!="),
            Match::Gt => write!(f, ">"),
            Match::Gte => write!(f, ">="),
            Match::Lt => write!(f, "<"),
            Match::Lte => write!(f, "<="),
            Match::In => write!(f, "in"),
            Match::All => write!(f, "all"),
        }
    }
}
