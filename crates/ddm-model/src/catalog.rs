//! The in-memory metadata catalog.
//!
//! Stand-in for the relational store of the full service: datasets and
//! hierarchies are loaded from a JSON document, indexed by id, and served
//! read-only. References between the two halves (dimension to hierarchy,
//! value to entry, entry to parent) are validated at load time so lookups
//! during rendering never fail.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::dataset::{Dataset, Dimension};
use crate::error::{ModelError, Result};
use crate::hierarchy::Hierarchy;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    datasets: BTreeMap<String, Dataset>,
    hierarchies: BTreeMap<String, Hierarchy>,
}

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    datasets: Vec<Dataset>,
    #[serde(default)]
    hierarchies: Vec<Hierarchy>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(text)?;
        let mut catalog = Catalog::new();
        for hierarchy in file.hierarchies {
            catalog.insert_hierarchy(hierarchy);
        }
        for dataset in file.datasets {
            catalog.insert_dataset(dataset);
        }
        catalog.validate()?;
        debug!(
            datasets = catalog.datasets.len(),
            hierarchies = catalog.hierarchies.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Inserts a dataset, ordering its versions newest-first.
    pub fn insert_dataset(&mut self, mut dataset: Dataset) {
        dataset.sort_versions();
        self.datasets.insert(dataset.id.clone(), dataset);
    }

    pub fn insert_hierarchy(&mut self, hierarchy: Hierarchy) {
        self.hierarchies.insert(hierarchy.id.clone(), hierarchy);
    }

    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    /// Datasets in catalog order (by id).
    pub fn datasets(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.values()
    }

    pub fn dataset(&self, id: &str) -> Option<&Dataset> {
        self.datasets.get(id)
    }

    pub fn hierarchies(&self) -> impl Iterator<Item = &Hierarchy> {
        self.hierarchies.values()
    }

    pub fn hierarchy(&self, id: &str) -> Option<&Hierarchy> {
        self.hierarchies.get(id)
    }

    /// The hierarchy backing a dimension, if it declares one.
    pub fn dimension_hierarchy(&self, dimension: &Dimension) -> Option<&Hierarchy> {
        dimension
            .hierarchy_id
            .as_ref()
            .and_then(|id| self.hierarchies.get(id))
    }

    fn validate(&self) -> Result<()> {
        for hierarchy in self.hierarchies.values() {
            for entry in hierarchy.entries() {
                if let Some(parent) = entry.parent
                    && hierarchy.entry(parent).is_none()
                {
                    return Err(ModelError::DanglingParent {
                        hierarchy: hierarchy.id.clone(),
                        entry: entry.id,
                    });
                }
            }
        }
        for dataset in self.datasets.values() {
            for version in &dataset.versions {
                for dimension in &version.dimensions {
                    self.validate_dimension(&dataset.id, dimension)?;
                }
            }
        }
        Ok(())
    }

    fn validate_dimension(&self, dataset: &str, dimension: &Dimension) -> Result<()> {
        let hierarchy = match dimension.hierarchy_id.as_ref() {
            Some(id) => match self.hierarchies.get(id) {
                Some(hierarchy) => Some(hierarchy),
                None => {
                    return Err(ModelError::UnknownHierarchy {
                        dataset: dataset.to_string(),
                        dimension: dimension.name.clone(),
                        hierarchy: id.clone(),
                    });
                }
            },
            None => None,
        };
        for value in &dimension.values {
            let Some(entry) = value.entry else {
                continue;
            };
            let Some(hierarchy) = hierarchy else {
                return Err(ModelError::MissingHierarchy {
                    dataset: dataset.to_string(),
                    dimension: dimension.name.clone(),
                });
            };
            if hierarchy.entry(entry).is_none() {
                return Err(ModelError::UnknownEntry {
                    dataset: dataset.to_string(),
                    dimension: dimension.name.clone(),
                    hierarchy: hierarchy.id.clone(),
                    entry,
                });
            }
        }
        Ok(())
    }
}
