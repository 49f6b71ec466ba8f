use thiserror::Error;

use super::actor::DeptId;

/// Hard failures surfaced to the caller. Anything the engine can recover
/// from locally (notably [`BadRuleData`]) never appears here.
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("unknown department id {id}")]
    UnknownDepartment { id: DeptId },

    #[error("permission store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

/// A clause whose stored data fails to parse against its declared kind
/// (bad JSON, wrong operand shape).
///
/// Recovered inside the engine: the clause is dropped from its fold with
/// a warning. Rule-authoring mistakes must not break access entirely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bad rule data for field '{field}': {detail}")]
pub struct BadRuleData {
    pub field: String,
    pub detail: String,
}

impl BadRuleData {
    pub(crate) fn new(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            detail: detail.into(),
        }
    }
}
