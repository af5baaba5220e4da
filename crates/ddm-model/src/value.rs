use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A value actually present in a dataset for one dimension, optionally
/// linked to an entry of the dimension's classification hierarchy.
///
/// Immutable once constructed. `id` is absent for synthetic wrappers used
/// when a bare hierarchy is materialized without a backing dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionValue {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub entry: Option<Uuid>,
}

impl DimensionValue {
    /// A plain value with no hierarchy backing.
    pub fn flat(id: Uuid, raw: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            value: Some(raw.into()),
            entry: None,
        }
    }

    /// A value backed by a hierarchy entry.
    pub fn hierarchical(id: Uuid, entry: Uuid) -> Self {
        Self {
            id: Some(id),
            value: None,
            entry: Some(entry),
        }
    }

    /// A synthetic wrapper around a bare hierarchy entry. Carries no
    /// dataset value id, so the rendered option is a placeholder.
    pub fn from_entry(entry: Uuid) -> Self {
        Self {
            id: None,
            value: None,
            entry: Some(entry),
        }
    }
}
