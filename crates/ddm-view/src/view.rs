//! View strategies for rendering dimension values.

use ddm_model::{DimensionValue, Hierarchy};

use crate::option::DimensionOption;
use crate::tree;

/// How to render a dimension's values: a flat sorted list, a sparse
/// hierarchy, or not at all.
///
/// The variant set is closed; callers dispatch through [`convert`] and
/// never need to know which strategy is in play.
///
/// [`convert`]: DimensionView::convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionView {
    /// A flat list of the options, ignoring any hierarchy structure.
    #[default]
    List,
    /// A sparse tree of the options according to the referenced hierarchy.
    /// Values without hierarchy backing render the same as [`List`].
    ///
    /// [`List`]: DimensionView::List
    Hierarchy,
    /// Do not render the values at all, e.g. in dataset listings where only
    /// the dimension structure is wanted.
    None,
}

impl DimensionView {
    /// Converts raw dimension values into the options to be rendered.
    ///
    /// Returns `Option::None` for [`DimensionView::None`]; the other views
    /// always produce a list, possibly empty. The conversion is total: a
    /// value whose entry id misses the supplied hierarchy falls back to its
    /// raw value, and a value with neither renders with an empty name.
    pub fn convert(
        self,
        values: &[DimensionValue],
        hierarchy: Option<&Hierarchy>,
    ) -> Option<Vec<DimensionOption>> {
        match self {
            DimensionView::List => Some(flat_options(values, hierarchy)),
            DimensionView::Hierarchy => Some(tree::sparse_tree(values, hierarchy)),
            DimensionView::None => Option::None,
        }
    }
}

/// One childless option per value. Output length equals input length.
fn flat_options(values: &[DimensionValue], hierarchy: Option<&Hierarchy>) -> Vec<DimensionOption> {
    let mut options: Vec<DimensionOption> = values
        .iter()
        .map(|value| value_option(value, hierarchy))
        .collect();
    options.sort();
    options
}

/// Converts one dimension value into a childless option. A hierarchical
/// value takes its entry's code, name and level; anything else uses the raw
/// value for both code and name.
pub(crate) fn value_option(
    value: &DimensionValue,
    hierarchy: Option<&Hierarchy>,
) -> DimensionOption {
    let entry = value
        .entry
        .and_then(|id| hierarchy.and_then(|h| h.entry(id)));
    match entry {
        Some(entry) => DimensionOption::new(
            value.id,
            Some(entry.code.clone()),
            entry.name.clone(),
            entry.level_type.clone(),
        ),
        None => {
            let raw = value.value.clone().unwrap_or_default();
            DimensionOption::new(value.id, Some(raw.clone()), raw, Option::None)
        }
    }
}
