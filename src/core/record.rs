use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::QualifiedField;

/// Snapshot of the subscribed record's field values.
///
/// Replaced wholesale on every fetch completion; the engine never patches
/// one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    fields: IndexMap<QualifiedField, String>,
}

impl RecordSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, field: QualifiedField, value: impl Into<String>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    pub fn insert(&mut self, field: QualifiedField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    /// Field lookup treating blank values as absent.
    #[must_use]
    pub fn value(&self, field: &QualifiedField) -> Option<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One delivery from the record data provider: a snapshot or a fetch error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEvent {
    Snapshot(RecordSnapshot),
    Error(String),
}
