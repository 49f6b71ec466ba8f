use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::types::{Department, DeptId};

/// Build a parent -> children adjacency index from a department list.
pub fn child_index<'a>(
    departments: impl IntoIterator<Item = &'a Department>,
) -> HashMap<DeptId, Vec<DeptId>> {
    let mut index: HashMap<DeptId, Vec<DeptId>> = HashMap::new();
    for dept in departments {
        if let Some(parent) = dept.parent {
            index.entry(parent).or_default().push(dept.id);
        }
    }
    index
}

/// The given departments plus every transitive child, walked breadth-first
/// over the adjacency index.
///
/// Parent links should form a tree, but the visited set also terminates the
/// walk if they ever form a cycle.
pub fn descendants_and_self(
    roots: impl IntoIterator<Item = DeptId>,
    children: &HashMap<DeptId, Vec<DeptId>>,
) -> BTreeSet<DeptId> {
    let mut seen = BTreeSet::new();
    let mut queue: VecDeque<DeptId> = roots.into_iter().collect();
    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        if let Some(kids) = children.get(&id) {
            queue.extend(kids);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;

    fn dept(id: DeptId, parent: Option<DeptId>) -> Department {
        Department {
            id,
            name: format!("d{id}"),
            is_active: true,
            mode: Mode::Or,
            parent,
        }
    }

    #[test]
    fn zero_descendants_is_singleton() {
        let depts = [dept(1, None)];
        let index = child_index(&depts);
        assert_eq!(
            descendants_and_self([1], &index),
            BTreeSet::from([1])
        );
    }

    #[test]
    fn walks_chain() {
        let depts = [dept(1, None), dept(2, Some(1)), dept(3, Some(2))];
        let index = child_index(&depts);
        assert_eq!(
            descendants_and_self([1], &index),
            BTreeSet::from([1, 2, 3])
        );
        assert_eq!(
            descendants_and_self([2], &index),
            BTreeSet::from([2, 3])
        );
    }

    #[test]
    fn walks_branches() {
        let depts = [
            dept(1, None),
            dept(2, Some(1)),
            dept(3, Some(1)),
            dept(4, Some(2)),
            dept(5, None),
        ];
        let index = child_index(&depts);
        assert_eq!(
            descendants_and_self([1], &index),
            BTreeSet::from([1, 2, 3, 4])
        );
    }

    #[test]
    fn multiple_roots_union() {
        let depts = [dept(1, None), dept(2, Some(1)), dept(5, None), dept(6, Some(5))];
        let index = child_index(&depts);
        assert_eq!(
            descendants_and_self([1, 5], &index),
            BTreeSet::from([1, 2, 5, 6])
        );
    }

    #[test]
    fn cycle_terminates() {
        // 1 -> 2 -> 3 -> 1
        let depts = [dept(1, Some(3)), dept(2, Some(1)), dept(3, Some(2))];
        let index = child_index(&depts);
        assert_eq!(
            descendants_and_self([1], &index),
            BTreeSet::from([1, 2, 3])
        );
    }
}
