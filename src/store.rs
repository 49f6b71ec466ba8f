use std::collections::{BTreeSet, HashMap};

use crate::hierarchy;
use crate::types::{Department, DeptId, PermissionRecord, Principal, ScopeError};

/// Read-only contracts the engine needs from the surrounding system:
/// the permission record store and the department hierarchy.
///
/// Implementations back onto whatever storage the application uses; any
/// failure is surfaced as [`ScopeError`] and aborts the engine call.
pub trait AccessDirectory {
    /// Active permission records that apply to the principal: assigned to
    /// the principal directly, or to the principal's department while
    /// that department is itself active. Ordering must be stable within
    /// one call but is otherwise unspecified.
    fn permissions_for(&self, principal: &Principal) -> Result<Vec<PermissionRecord>, ScopeError>;

    /// Look up one department.
    fn department(&self, id: DeptId) -> Result<Option<Department>, ScopeError>;

    /// The given departments plus every transitive child.
    fn descendants_and_self(&self, roots: &[DeptId]) -> Result<BTreeSet<DeptId>, ScopeError>;
}

/// In-process directory backed by plain collections: the reference
/// collaborator used by tests and small deployments.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    departments: HashMap<DeptId, Department>,
    records: Vec<PermissionRecord>,
}

impl MemoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a department, builder-style.
    #[must_use]
    pub fn with_department(mut self, dept: Department) -> Self {
        self.departments.insert(dept.id, dept);
        self
    }

    /// Add a permission record, builder-style.
    #[must_use]
    pub fn with_record(mut self, record: PermissionRecord) -> Self {
        self.records.push(record);
        self
    }
}

/// The loader query: is this record in play for this principal?
fn record_applies(
    record: &PermissionRecord,
    principal: &Principal,
    departments: &HashMap<DeptId, Department>,
) -> bool {
    if !record.is_active {
        return false;
    }
    if record.user == Some(principal.id) {
        return true;
    }
    match (record.dept, principal.dept) {
        (Some(record_dept), Some(principal_dept)) if record_dept == principal_dept => departments
            .get(&record_dept)
            .is_some_and(|d| d.is_active),
        _ => false,
    }
}

impl AccessDirectory for MemoryDirectory {
    fn permissions_for(&self, principal: &Principal) -> Result<Vec<PermissionRecord>, ScopeError> {
        Ok(self
            .records
            .iter()
            .filter(|r| record_applies(r, principal, &self.departments))
            .cloned()
            .collect())
    }

    fn department(&self, id: DeptId) -> Result<Option<Department>, ScopeError> {
        Ok(self.departments.get(&id).cloned())
    }

    fn descendants_and_self(&self, roots: &[DeptId]) -> Result<BTreeSet<DeptId>, ScopeError> {
        let index = hierarchy::child_index(self.departments.values());
        Ok(hierarchy::descendants_and_self(roots.iter().copied(), &index))
    }
}
