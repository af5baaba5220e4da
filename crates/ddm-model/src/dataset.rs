//! Datasets, their published versions, and per-version dimensions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value::DimensionValue;

/// A named axis of classification within one dataset version, together with
/// the values the dataset actually carries for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    /// Id of the classification hierarchy backing this dimension, if any.
    #[serde(default)]
    pub hierarchy_id: Option<String>,
    #[serde(default)]
    pub values: Vec<DimensionValue>,
}

impl Dimension {
    pub fn is_hierarchical(&self) -> bool {
        self.hierarchy_id.is_some()
    }
}

/// One published version of a dataset within an edition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetVersion {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub s3_url: Option<String>,
    /// Raw JSON metadata document attached to this version.
    #[serde(default)]
    pub metadata: Option<String>,
    /// Display label of the edition (major series) this version belongs to.
    pub edition: String,
    pub major: u32,
    pub minor: u32,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

impl DatasetVersion {
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }
}

/// A dataset: a stable id and title with its published versions, held
/// newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub metadata: Option<String>,
    #[serde(default)]
    pub versions: Vec<DatasetVersion>,
}

impl Dataset {
    /// The newest version across all editions.
    pub fn latest(&self) -> Option<&DatasetVersion> {
        self.versions.first()
    }

    /// Looks up a version by edition label and minor version number.
    pub fn version(&self, edition: &str, minor: u32) -> Option<&DatasetVersion> {
        self.versions
            .iter()
            .find(|v| v.edition == edition && v.minor == minor)
    }

    /// Orders versions newest-first so `latest` and edition grouping can
    /// rely on position.
    pub(crate) fn sort_versions(&mut self) {
        self.versions
            .sort_by(|a, b| b.major.cmp(&a.major).then(b.minor.cmp(&a.minor)));
    }
}
