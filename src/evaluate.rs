use crate::types::{Predicate, Row};

/// Evaluate a compiled predicate against one row. A missing field or an
/// incomparable value pair never matches.
pub(crate) fn evaluate(predicate: &Predicate, row: &Row) -> bool {
    match predicate {
        Predicate::All => true,
        Predicate::None => false,
        Predicate::Compare { field, op, value } => row
            .get(field)
            .and_then(|row_value| row_value.compare(*op, value))
            .unwrap_or(false),
        Predicate::And(parts) => parts.iter().all(|p| evaluate(p, row)),
        Predicate::Or(parts) => parts.iter().any(|p| evaluate(p, row)),
    }
}
