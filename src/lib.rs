mod compile;
mod evaluate;
mod hierarchy;
mod normalize;
mod resolve;
mod scope;
mod store;
mod types;

pub use hierarchy::{child_index, descendants_and_self};
pub use scope::{owner_scope, scope_for, visible_rows};
pub use store::{AccessDirectory, MemoryDirectory};
pub use types::{
    BadRuleData, ClauseKind, Department, DeptId, InvalidMode, Match, Mode, PermissionRecord,
    Predicate, Principal, Row, RuleClause, ScopeError, UserId, Value, WILDCARD,
};
