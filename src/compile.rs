use crate::resolve::ResolvedClause;
use crate::types::{Match, Mode, Predicate};

/// One permission record with its surviving clauses fully resolved.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CompiledRecord {
    pub(crate) mode: Mode,
    pub(crate) clauses: Vec<ResolvedClause>,
}

/// Fold each record's clauses under its own mode, then fold the
/// per-record predicates under the department mode. Both levels share the
/// same identity/dominance algebra and deduplicate structurally before
/// folding.
pub(crate) fn compile(records: &[CompiledRecord], dept_mode: Mode) -> Predicate {
    let mut folded: Vec<Predicate> = Vec::new();
    for record in records {
        let pred = fold_record(record);
        if !folded.contains(&pred) {
            folded.push(pred);
        }
    }

    match dept_mode {
        // any always-true record grants the whole collection
        Mode::Or => Predicate::disjunction(folded),
        Mode::And => {
            // an always-true record contributes no constraint; if no real
            // constraint remains, nothing is granted
            folded.retain(|p| !p.is_all());
            if folded.is_empty() {
                return Predicate::None;
            }
            Predicate::conjunction(folded)
        }
    }
}

fn fold_record(record: &CompiledRecord) -> Predicate {
    let mut parts: Vec<Predicate> = Vec::new();
    for clause in &record.clauses {
        let pred = predicate_of(clause);
        if !parts.contains(&pred) {
            parts.push(pred);
        }
    }
    match record.mode {
        Mode::And => Predicate::conjunction(parts),
        Mode::Or => Predicate::disjunction(parts),
    }
}

fn predicate_of(clause: &ResolvedClause) -> Predicate {
    if clause.op == Match::All {
        Predicate::All
    } else {
        Predicate::Compare {
            field: clause.field.clone(),
            op: clause.op,
            value: clause.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    fn rc(field: &str, v: i64) -> ResolvedClause {
        ResolvedClause {
            field: field.into(),
            op: Match::Eq,
            value: Value::Int(v),
        }
    }

    fn all_marker() -> ResolvedClause {
        ResolvedClause {
            field: String::new(),
            op: Match::All,
            value: Value::Null,
        }
    }

    fn cmp(field: &str, v: i64) -> Predicate {
        Predicate::compare(field, Match::Eq, v)
    }

    #[test]
    fn no_records_denies_everything() {
        assert_eq!(compile(&[], Mode::Or), Predicate::None);
        assert_eq!(compile(&[], Mode::And), Predicate::None);
    }

    #[test]
    fn single_record_single_clause() {
        let records = [CompiledRecord {
            mode: Mode::Or,
            clauses: vec![rc("creator_id", 7)],
        }];
        assert_eq!(compile(&records, Mode::Or), cmp("creator_id", 7));
    }

    #[test]
    fn record_and_mode_conjoins_clauses() {
        let records = [CompiledRecord {
            mode: Mode::And,
            clauses: vec![rc("a", 1), rc("b", 2)],
        }];
        assert_eq!(
            compile(&records, Mode::Or),
            Predicate::And(vec![cmp("a", 1), cmp("b", 2)])
        );
    }

    #[test]
    fn all_marker_is_identity_within_and_record() {
        let records = [CompiledRecord {
            mode: Mode::And,
            clauses: vec![rc("a", 1), all_marker(), rc("b", 2)],
        }];
        assert_eq!(
            compile(&records, Mode::Or),
            Predicate::And(vec![cmp("a", 1), cmp("b", 2)])
        );
    }

    #[test]
    fn all_marker_dominates_or_record() {
        let records = [CompiledRecord {
            mode: Mode::Or,
            clauses: vec![rc("a", 1), all_marker()],
        }];
        assert_eq!(compile(&records, Mode::And), Predicate::None);
        assert_eq!(compile(&records, Mode::Or), Predicate::All);
    }

    #[test]
    fn department_or_unions_records() {
        let records = [
            CompiledRecord {
                mode: Mode::Or,
                clauses: vec![rc("creator_id", 7)],
            },
            CompiledRecord {
                mode: Mode::Or,
                clauses: vec![rc("dept_belong", 1)],
            },
        ];
        assert_eq!(
            compile(&records, Mode::Or),
            Predicate::Or(vec![cmp("creator_id", 7), cmp("dept_belong", 1)])
        );
    }

    #[test]
    fn department_and_intersects_records() {
        let records = [
            CompiledRecord {
                mode: Mode::Or,
                clauses: vec![rc("creator_id", 7)],
            },
            CompiledRecord {
                mode: Mode::Or,
                clauses: vec![rc("dept_belong", 1)],
            },
        ];
        assert_eq!(
            compile(&records, Mode::And),
            Predicate::And(vec![cmp("creator_id", 7), cmp("dept_belong", 1)])
        );
    }

    #[test]
    fn department_and_with_only_always_true_records_denies() {
        let records = [CompiledRecord {
            mode: Mode::Or,
            clauses: vec![all_marker()],
        }];
        assert_eq!(compile(&records, Mode::And), Predicate::None);
    }

    #[test]
    fn department_and_skips_always_true_but_keeps_rest() {
        let records = [
            CompiledRecord {
                mode: Mode::Or,
                clauses: vec![all_marker()],
            },
            CompiledRecord {
                mode: Mode::Or,
                clauses: vec![rc("creator_id", 7)],
            },
        ];
        assert_eq!(compile(&records, Mode::And), cmp("creator_id", 7));
    }

    #[test]
    fn department_or_with_always_true_record_grants_all() {
        let records = [
            CompiledRecord {
                mode: Mode::Or,
                clauses: vec![rc("creator_id", 7)],
            },
            CompiledRecord {
                mode: Mode::Or,
                clauses: vec![all_marker()],
            },
        ];
        assert_eq!(compile(&records, Mode::Or), Predicate::All);
    }

    #[test]
    fn duplicate_records_fold_once() {
        let records = [
            CompiledRecord {
                mode: Mode::Or,
                clauses: vec![rc("creator_id", 7)],
            },
            CompiledRecord {
                mode: Mode::Or,
                clauses: vec![rc("creator_id", 7)],
            },
        ];
        assert_eq!(compile(&records, Mode::Or), cmp("creator_id", 7));
        assert_eq!(compile(&records, Mode::And), cmp("creator_id", 7));
    }

    #[test]
    fn duplicate_clauses_within_record_fold_once() {
        let records = [CompiledRecord {
            mode: Mode::And,
            clauses: vec![rc("a", 1), rc("a", 1)],
        }];
        assert_eq!(compile(&records, Mode::Or), cmp("a", 1));
    }
}
