use tracing::{debug, warn};

use crate::compile::{compile, CompiledRecord};
use crate::normalize::normalize;
use crate::resolve::{resolve, Resolved, ResolveError};
use crate::store::AccessDirectory;
use crate::types::{Match, Predicate, Principal, Row, ScopeError};

/// Compute the visibility predicate for `principal` over the collection
/// named `target` (fully-qualified `app.model` form, e.g. `"movies.film"`).
///
/// The result is ready to hand to a query builder: [`Predicate::All`]
/// means no restriction, [`Predicate::None`] means no rows. Absent any
/// applicable permission record the outcome is `None` — deny by default.
///
/// Superusers are the caller's short-circuit, ahead of this call; see
/// [`visible_rows`] for the collaborator-side flow.
///
/// # Errors
///
/// Fails on storage faults and on a dangling department reference.
/// Malformed rule data never fails the call: the offending clause is
/// dropped with a warning.
pub fn scope_for(
    dir: &impl AccessDirectory,
    principal: &Principal,
    target: &str,
) -> Result<Predicate, ScopeError> {
    let dept = match principal.dept {
        Some(id) => Some(
            dir.department(id)?
                .ok_or(ScopeError::UnknownDepartment { id })?,
        ),
        None => None,
    };
    // Without a department there is no department-level mode; fall back
    // to or-combination across records.
    let dept_mode = dept.as_ref().map(|d| d.mode).unwrap_or_default();

    let mut compiled: Vec<CompiledRecord> = Vec::new();
    for record in dir.permissions_for(principal)? {
        let Some(normalized) = normalize(&record, target) else {
            continue;
        };
        let mut clauses = Vec::new();
        for clause in &normalized.clauses {
            match resolve(clause, principal, dept.as_ref(), normalized.mode, dir) {
                Ok(Resolved::Clause(resolved)) => clauses.push(resolved),
                Ok(Resolved::Everything) => {
                    debug!(collection = target, record = %record.name, "unconditional grant, scope is unrestricted");
                    return Ok(Predicate::All);
                }
                Err(ResolveError::Bad(err)) => {
                    warn!(collection = target, record = %record.name, %err, "dropping unmatchable clause");
                }
                Err(ResolveError::Hard(err)) => return Err(err),
            }
        }
        if clauses.is_empty() {
            warn!(collection = target, record = %record.name, "every clause was dropped, record contributes nothing");
            continue;
        }
        compiled.push(CompiledRecord {
            mode: normalized.mode,
            clauses,
        });
    }

    let predicate = compile(&compiled, dept_mode);
    debug!(collection = target, %predicate, "compiled scope");
    Ok(predicate)
}

/// Apply a principal's scope to an in-memory collection: the query-builder
/// side of the engine boundary. Superusers see everything without the
/// engine running at all.
///
/// # Errors
///
/// Propagates [`scope_for`] failures.
pub fn visible_rows<'a>(
    dir: &impl AccessDirectory,
    principal: &Principal,
    target: &str,
    rows: &'a [Row],
) -> Result<Vec<&'a Row>, ScopeError> {
    if principal.is_superuser {
        return Ok(rows.iter().collect());
    }
    let predicate = scope_for(dir, principal, target)?;
    Ok(rows.iter().filter(|row| predicate.matches(row)).collect())
}

/// Restrict a collection to rows the principal created, independent of
/// any stored permission records. `owner_field` names the audit column
/// holding the creator id (conventionally `"creator_id"`).
#[must_use]
pub fn owner_scope(owner_field: &str, principal: &Principal) -> Predicate {
    Predicate::compare(owner_field, Match::Eq, principal.id)
}
