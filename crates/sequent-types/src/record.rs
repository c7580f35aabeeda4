//! Named-field values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a lookup names a field the record does not carry.
///
/// Looking up an absent field is always an error, never a silent default;
/// the caller decides what absence means.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("missing field: {field}")]
    Missing { field: String },
}

/// An immutable mapping from field name to value.
///
/// Records are built with [`with_field`](Record::with_field), which takes
/// ownership and returns the extended record, so a record held by two
/// owners can never diverge under either of them. Field order is
/// deterministic (lexicographic by name).
///
/// # Examples
///
/// ```
/// use sequent_types::Record;
///
/// let frog = Record::new().with_field("name", "Kermit");
/// assert_eq!(frog.field("name"), Ok(&"Kermit"));
/// assert!(frog.field("species").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record<V> {
    fields: BTreeMap<String, V>,
}

impl<V> Record<V> {
    /// Creates a record with no fields.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Returns this record extended with `name` bound to `value`.
    ///
    /// Binding a name that is already present replaces its value in the
    /// returned record.
    pub fn with_field(mut self, name: impl Into<String>, value: V) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Looks up the value stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Missing`] when the record has no such field.
    pub fn field(&self, name: &str) -> Result<&V, FieldError> {
        self.fields.get(name).ok_or_else(|| FieldError::Missing {
            field: name.to_owned(),
        })
    }

    /// Whether the record carries a field called `name`.
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, value)` pairs in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>, V> FromIterator<(S, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
