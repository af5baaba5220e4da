//! Classification hierarchies shared across datasets.
//!
//! A hierarchy is an arena of entries addressed by stable id. Each entry
//! stores its parent as an id into the same arena, so the structure carries
//! no reference cycles and the full parent chain of any entry can be walked
//! once the hierarchy is loaded.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Descriptor for one level of a hierarchy. Lower levels are closer to the
/// root. Level types order and label entries; they never identify them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelType {
    pub level: i32,
    pub name: String,
}

impl LevelType {
    pub fn new(level: i32, name: impl Into<String>) -> Self {
        Self {
            level,
            name: name.into(),
        }
    }
}

/// One node of a classification hierarchy (e.g. a geographic area),
/// independent of any single dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyEntry {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub level_type: Option<LevelType>,
    #[serde(default)]
    pub parent: Option<Uuid>,
}

/// A classification hierarchy, held as an id-addressed entry arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hierarchy {
    pub id: String,
    pub name: String,
    pub kind: String,
    #[serde(with = "entry_seq", default)]
    entries: BTreeMap<Uuid, HierarchyEntry>,
}

impl Hierarchy {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Inserts an entry, replacing any previous entry with the same id.
    pub fn insert_entry(&mut self, entry: HierarchyEntry) {
        self.entries.insert(entry.id, entry);
    }

    pub fn entry(&self, id: Uuid) -> Option<&HierarchyEntry> {
        self.entries.get(&id)
    }

    pub fn parent_of(&self, entry: &HierarchyEntry) -> Option<&HierarchyEntry> {
        entry.parent.and_then(|id| self.entries.get(&id))
    }

    pub fn entries(&self) -> impl Iterator<Item = &HierarchyEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entries are authored as a sequence; the arena index is rebuilt on load.
mod entry_seq {
    use std::collections::BTreeMap;

    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    use super::HierarchyEntry;

    pub fn serialize<S>(
        entries: &BTreeMap<Uuid, HierarchyEntry>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(entries.len()))?;
        for entry in entries.values() {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<Uuid, HierarchyEntry>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<HierarchyEntry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|entry| (entry.id, entry)).collect())
    }
}
