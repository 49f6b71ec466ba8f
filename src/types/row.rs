use std::collections::HashMap;

use super::value::Value;

/// One record of a target collection, as seen by the in-memory query
/// collaborator: field paths mapped to leaf values.
///
/// Related-field traversals use dot-joined paths (`"creator.dept"`),
/// mirroring how clause fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, builder-style.
    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.insert(field, value.into());
        self
    }

    /// Insert a field value (mutable reference version).
    pub fn insert(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_owned(), value);
    }

    /// Look up a field value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}
