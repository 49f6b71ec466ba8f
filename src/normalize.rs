use crate::types::{ClauseKind, Mode, PermissionRecord, RuleClause};

/// A permission record reduced to the clauses targeting one collection,
/// under its effective combination mode.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NormalizedRecord {
    pub(crate) mode: Mode,
    pub(crate) clauses: Vec<RuleClause>,
}

/// Filter a record's clauses down to `target`, applying the per-record
/// "all data" dominance short-circuit. Returns `None` when nothing
/// survives; such a record contributes nothing downstream.
pub(crate) fn normalize(record: &PermissionRecord, target: &str) -> Option<NormalizedRecord> {
    let mode = record.effective_mode();
    let mut clauses = Vec::new();
    for clause in &record.rules {
        if !clause.applies_to(target) {
            continue;
        }
        if clause.kind == ClauseKind::All {
            match mode {
                // "everything" adds no constraint to a conjunction
                Mode::And => continue,
                // "everything" dominates a disjunction outright; clauses
                // before and after it are irrelevant
                Mode::Or => {
                    return Some(NormalizedRecord {
                        mode,
                        clauses: vec![clause.clone()],
                    })
                }
            }
        }
        clauses.push(clause.clone());
    }
    if clauses.is_empty() {
        None
    } else {
        Some(NormalizedRecord { mode, clauses })
    }
}
