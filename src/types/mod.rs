mod actor;
mod clause;
mod error;
mod mode;
mod predicate;
mod record;
mod row;
mod value;

pub use actor::{Department, DeptId, Principal, UserId};
pub use clause::{ClauseKind, Match, RuleClause, WILDCARD};
pub use error::{BadRuleData, ScopeError};
pub use mode::{InvalidMode, Mode};
pub use predicate::Predicate;
pub use record::PermissionRecord;
pub use row::Row;
pub use value::Value;
