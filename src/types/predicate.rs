use std::fmt;

use super::clause::Match;
use super::row::Row;
use super::value::Value;

/// The boolean filter expression handed to the storage collaborator.
///
/// `All` (no restriction) is a distinct variant rather than an empty
/// conjunction so the dominance short-circuits can tell "always true"
/// apart from "no clauses contributed". Structural equality and hashing
/// support the set-semantics dedup performed before folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// Matches every row: the AND-identity and OR-dominator.
    All,
    /// Matches no row: the OR-identity and AND-dominator.
    None,
    Compare {
        field: String,
        op: Match,
        value: Value,
    },
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    /// A single field comparison.
    #[must_use]
    pub fn compare(field: impl Into<String>, op: Match, value: impl Into<Value>) -> Predicate {
        Predicate::Compare {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Predicate::All)
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Predicate::None)
    }

    /// AND-fold. `All` parts are skipped (identity), a `None` part
    /// dominates, nested conjunctions flatten, and an empty fold is `All`.
    #[must_use]
    pub fn conjunction(parts: Vec<Predicate>) -> Predicate {
        let mut out = Vec::new();
        for part in parts {
            match part {
                Predicate::All => continue,
                Predicate::None => return Predicate::None,
                Predicate::And(inner) => out.extend(inner),
                other => out.push(other),
            }
        }
        match out.len() {
            0 => Predicate::All,
            1 => out.swap_remove(0),
            _ => Predicate::And(out),
        }
    }

    /// OR-fold. `None` parts are skipped (identity), an `All` part
    /// dominates, nested disjunctions flatten, and an empty fold is `None`.
    #[must_use]
    pub fn disjunction(parts: Vec<Predicate>) -> Predicate {
        let mut out = Vec::new();
        for part in parts {
            match part {
                Predicate::None => continue,
                Predicate::All => return Predicate::All,
                Predicate::Or(inner) => out.extend(inner),
                other => out.push(other),
            }
        }
        match out.len() {
            0 => Predicate::None,
            1 => out.swap_remove(0),
            _ => Predicate::Or(out),
        }
    }

    /// Evaluate this predicate against one row of the target collection.
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        crate::evaluate::evaluate(self, row)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::All => write!(f, "true"),
            Predicate::None => write!(f, "false"),
            Predicate::Compare { field, op, value } => write!(f, "({field} {op} {value})"),
            Predicate::And(parts) => write_joined(f, parts, " AND "),
            Predicate::Or(parts) => write_joined(f, parts, " OR "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[Predicate], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{part}")?;
    }
    write!(f, ")")
}
