use chrono::{Duration, Utc};

use crate::store::AccessDirectory;
use crate::types::{
    BadRuleData, ClauseKind, Department, DeptId, Match, Mode, Principal, RuleClause, ScopeError,
    Value,
};

/// A clause with its declarative value-reference replaced by a concrete
/// operand and operator. Built fresh each pass; the loaded clause is
/// never rewritten in place.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedClause {
    pub(crate) field: String,
    pub(crate) op: Match,
    pub(crate) value: Value,
}

/// Outcome of resolving one clause.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Resolved {
    Clause(ResolvedClause),
    /// `value.all` while both the department mode and the record's
    /// effective mode are or-combined: the whole engine call
    /// short-circuits to an unrestricted result.
    Everything,
}

#[derive(Debug)]
pub(crate) enum ResolveError {
    /// Malformed stored data; the caller recovers by dropping the clause.
    Bad(BadRuleData),
    /// Storage failure during descendant lookup; propagated untouched.
    Hard(ScopeError),
}

impl From<BadRuleData> for ResolveError {
    fn from(err: BadRuleData) -> Self {
        ResolveError::Bad(err)
    }
}

impl From<ScopeError> for ResolveError {
    fn from(err: ScopeError) -> Self {
        ResolveError::Hard(err)
    }
}

/// Resolve one surviving clause for `principal` against the directory.
///
/// `record_mode` is the enclosing record's effective mode; it only
/// matters for the `value.all` early exit.
pub(crate) fn resolve(
    clause: &RuleClause,
    principal: &Principal,
    dept: Option<&Department>,
    record_mode: Mode,
    dir: &impl AccessDirectory,
) -> Result<Resolved, ResolveError> {
    let resolved = |op, value| {
        Resolved::Clause(ResolvedClause {
            field: clause.field.clone(),
            op,
            value,
        })
    };

    match clause.kind {
        ClauseKind::UserId => Ok(resolved(clause.match_op, Value::Int(principal.id))),
        ClauseKind::UserDeptId => {
            let dept = dept.ok_or_else(|| no_department(clause))?;
            Ok(resolved(clause.match_op, Value::Int(dept.id)))
        }
        ClauseKind::UserDeptIds => {
            let dept = dept.ok_or_else(|| no_department(clause))?;
            let ids = dir.descendants_and_self(&[dept.id])?;
            Ok(resolved(Match::In, id_list(ids)))
        }
        ClauseKind::DeptIds => {
            let roots = parse_dept_roots(clause)?;
            let ids = dir.descendants_and_self(&roots)?;
            Ok(resolved(Match::In, id_list(ids)))
        }
        ClauseKind::All => {
            let dept_mode = dept.map(|d| d.mode).unwrap_or_default();
            if dept_mode == Mode::Or && record_mode == Mode::Or {
                return Ok(Resolved::Everything);
            }
            Ok(resolved(Match::All, Value::Null))
        }
        ClauseKind::DateOffset => {
            let seconds: i64 = serde_json::from_str(clause.value.trim()).map_err(|err| {
                BadRuleData::new(&clause.field, format!("bad date offset: {err}"))
            })?;
            Ok(resolved(
                clause.match_op,
                Value::Time(Utc::now() + Duration::seconds(seconds)),
            ))
        }
        ClauseKind::Json => {
            let json: serde_json::Value = serde_json::from_str(&clause.value).map_err(|err| {
                BadRuleData::new(&clause.field, format!("bad JSON literal: {err}"))
            })?;
            if json.is_object() {
                return Err(BadRuleData::new(
                    &clause.field,
                    "JSON object is not a comparable operand",
                )
                .into());
            }
            Ok(resolved(clause.match_op, Value::from(json)))
        }
        ClauseKind::Text => Ok(resolved(
            clause.match_op,
            Value::String(clause.value.clone()),
        )),
    }
}

fn no_department(clause: &RuleClause) -> ResolveError {
    BadRuleData::new(
        &clause.field,
        "department-scoped clause but the principal has no department",
    )
    .into()
}

fn id_list(ids: impl IntoIterator<Item = DeptId>) -> Value {
    Value::List(ids.into_iter().map(Value::Int).collect())
}

/// The `value.dept.ids` operand is a JSON-encoded department id or list
/// of ids, whose descendants are then looked up.
fn parse_dept_roots(clause: &RuleClause) -> Result<Vec<DeptId>, ResolveError> {
    let json: serde_json::Value = serde_json::from_str(&clause.value)
        .map_err(|err| BadRuleData::new(&clause.field, format!("bad department id data: {err}")))?;
    let as_id = |v: &serde_json::Value| {
        v.as_i64().ok_or_else(|| {
            ResolveError::from(BadRuleData::new(
                &clause.field,
                "department ids must be integers",
            ))
        })
    };
    match &json {
        serde_json::Value::Number(_) => Ok(vec![as_id(&json)?]),
        serde_json::Value::Array(items) => items.iter().map(as_id).collect(),
        _ => Err(BadRuleData::new(
            &clause.field,
            "expected a department id or a list of department ids",
        )
        .into()),
    }
}
