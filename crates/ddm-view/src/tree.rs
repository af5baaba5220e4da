//! Sparse hierarchy reconstruction from flat dimension values.
//!
//! Dataset value lists are sparse relative to the full classification
//! hierarchy they reference, so the tree is rebuilt bottom-up from the
//! values actually present: each value's ancestor chain is walked toward
//! the root, creating placeholder options for levels the dataset does not
//! carry and reusing the option already created for an ancestor shared with
//! an earlier value. A walk stops at the first link that is already wired:
//! everything above that link was wired, and rooted, by the value that
//! created it. Total work is proportional to the number of values times the
//! average ancestor-chain depth, not to the size of the hierarchy.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};

use uuid::Uuid;

use ddm_model::{DimensionValue, Hierarchy, HierarchyEntry};

use crate::option::{DimensionOption, OptionKey};
use crate::view::value_option;

/// Builds the minimal forest of options covering the given values and their
/// ancestors. Root order is the order in which each root was first reached.
pub(crate) fn sparse_tree(
    values: &[DimensionValue],
    hierarchy: Option<&Hierarchy>,
) -> Vec<DimensionOption> {
    // Ancestors that are themselves dataset values must come out non-empty,
    // so the value id for every referenced entry is collected up front.
    let mut value_ids: HashMap<Uuid, Uuid> = HashMap::new();
    for value in values {
        if let (Some(value_id), Some(entry_id)) = (value.id, value.entry) {
            value_ids.entry(entry_id).or_insert(value_id);
        }
    }

    let mut builder = TreeBuilder {
        hierarchy,
        value_ids,
        nodes: Vec::new(),
        by_entry: HashMap::new(),
        roots: Vec::new(),
        root_keys: HashSet::new(),
    };
    for value in values {
        match value.entry.and_then(|id| builder.lookup(id)) {
            Some(entry) => builder.add_hierarchical(entry),
            None => {
                // Values without hierarchy backing never take part in an
                // ancestor walk; they stand alone at the root level.
                let option = value_option(value, hierarchy);
                let index = builder.push_node(option);
                builder.add_root(index);
            }
        }
    }
    builder.finish()
}

struct TreeBuilder<'h> {
    hierarchy: Option<&'h Hierarchy>,
    value_ids: HashMap<Uuid, Uuid>,
    nodes: Vec<Node>,
    /// Memoized option per hierarchy entry: however many values reference an
    /// entry or walk through it, it resolves to the same node.
    by_entry: HashMap<Uuid, usize>,
    roots: Vec<usize>,
    root_keys: HashSet<OptionKey>,
}

struct Node {
    option: DimensionOption,
    children: BTreeMap<OptionKey, usize>,
}

impl<'h> TreeBuilder<'h> {
    fn lookup(&self, id: Uuid) -> Option<&'h HierarchyEntry> {
        self.hierarchy.and_then(|h| h.entry(id))
    }

    /// Wires a hierarchical value's option to its ancestors, creating empty
    /// placeholder options for levels missing from the dataset.
    fn add_hierarchical(&mut self, entry: &'h HierarchyEntry) {
        let mut entry = entry;
        let mut current = self.option_index(entry);
        loop {
            let Some(parent) = entry.parent.and_then(|id| self.lookup(id)) else {
                self.add_root(current);
                return;
            };
            let parent_index = self.option_index(parent);
            if !self.attach(parent_index, current) {
                // The chain above this link, up to and including its root,
                // was already wired by an earlier value.
                return;
            }
            entry = parent;
            current = parent_index;
        }
    }

    /// Resolves the option for a hierarchy entry, creating it on first
    /// encounter. An entry with no matching dataset value becomes an empty
    /// placeholder.
    fn option_index(&mut self, entry: &HierarchyEntry) -> usize {
        if let Some(&index) = self.by_entry.get(&entry.id) {
            return index;
        }
        let id = self.value_ids.get(&entry.id).copied();
        let option = DimensionOption::new(
            id,
            Some(entry.code.clone()),
            entry.name.clone(),
            entry.level_type.clone(),
        );
        let index = self.push_node(option);
        self.by_entry.insert(entry.id, index);
        index
    }

    fn push_node(&mut self, option: DimensionOption) -> usize {
        self.nodes.push(Node {
            option,
            children: BTreeMap::new(),
        });
        self.nodes.len() - 1
    }

    /// Attaches `child` under `parent`, returning whether the link is new.
    /// Sibling membership is structural: a child matching an existing
    /// sibling's `(level, name, code)` key is the same child.
    fn attach(&mut self, parent: usize, child: usize) -> bool {
        let key = self.nodes[child].option.sort_key();
        match self.nodes[parent].children.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(child);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Registers a top-level option, deduplicating structurally.
    fn add_root(&mut self, index: usize) {
        let key = self.nodes[index].option.sort_key();
        if self.root_keys.insert(key) {
            self.roots.push(index);
        }
    }

    fn finish(mut self) -> Vec<DimensionOption> {
        let roots = std::mem::take(&mut self.roots);
        roots
            .into_iter()
            .map(|index| self.take_subtree(index))
            .collect()
    }

    /// Assembles the subtree below `index`; children come out in key order.
    fn take_subtree(&mut self, index: usize) -> DimensionOption {
        let children = std::mem::take(&mut self.nodes[index].children);
        let mut option = self.nodes[index].option.clone();
        option.options = children
            .into_values()
            .map(|child| self.take_subtree(child))
            .collect();
        option
    }
}
