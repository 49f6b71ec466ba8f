use serde::{Deserialize, Serialize};

use super::mode::Mode;

pub type UserId = i64;
pub type DeptId = i64;

/// The authenticated actor whose visibility is being computed.
///
/// Superusers bypass the engine entirely; the check belongs to the caller,
/// ahead of any engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub is_superuser: bool,
    #[serde(default)]
    pub dept: Option<DeptId>,
}

/// A node in the department hierarchy.
///
/// `mode` is the department-level combination mode applied across the
/// per-record predicates of its members. An inactive department's
/// assigned permission records never participate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DeptId,
    pub name: String,
    pub is_active: bool,
    pub mode: Mode,
    #[serde(default)]
    pub parent: Option<DeptId>,
}
