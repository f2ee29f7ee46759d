use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully qualified record field identifier in `Object.Field` form.
///
/// Used both to build the fetch field list handed to the record data
/// provider and to look values up in a delivered [`super::RecordSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedField(String);

impl QualifiedField {
    /// Builds a qualified field from an object type name and a bare field name.
    ///
    /// The field name is trimmed before use. Returns `None` when the trimmed
    /// field name is empty or the object type is absent or empty, so callers
    /// treat "not configured" and "configured blank" identically.
    #[must_use]
    pub fn qualify(object_type: Option<&str>, field_name: Option<&str>) -> Option<Self> {
        let object_type = object_type.filter(|name| !name.is_empty())?;
        let field_name = field_name.map(str::trim).filter(|name| !name.is_empty())?;
        Some(Self(format!("{object_type}.{field_name}")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QualifiedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
