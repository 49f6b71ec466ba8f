use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Combination mode for folding clauses (within a record) and per-record
/// predicates (across a department). Exactly two values, wire-encoded as
/// the integers `0` (Or) and `1` (And) via `TryFrom<u8>`/`Into<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mode {
    /// Any one clause/record suffices; the default for singleton clause lists.
    #[default]
    Or,
    /// Every clause/record must hold.
    And,
}

/// A wire integer that does not name a valid [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid combination mode {0}: expected 0 (or) or 1 (and)")]
pub struct InvalidMode(pub u8);

impl TryFrom<u8> for Mode {
    type Error = InvalidMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Or),
            1 => Ok(Mode::And),
            other => Err(InvalidMode(other)),
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Or => 0,
            Mode::And => 1,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Or => f.write_str("or"),
            Mode::And => f.write_str("and"),
        }
    }
}
