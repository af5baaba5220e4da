//! The rendered dimension option node.

use std::cmp::Ordering;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use uuid::Uuid;

use ddm_model::LevelType;

/// A rendered dimension option: either a dataset value (`id` present) or a
/// structural ancestor placeholder (`id` absent).
///
/// Options are compared and deduplicated by their `(level type, name, code)`
/// triple, never by identity or id. `options` holds the children of a
/// hierarchy view, ordered by the same triple.
#[derive(Debug, Clone)]
pub struct DimensionOption {
    pub id: Option<Uuid>,
    pub code: Option<String>,
    pub name: String,
    pub level_type: Option<LevelType>,
    pub options: Vec<DimensionOption>,
}

impl DimensionOption {
    pub fn new(
        id: Option<Uuid>,
        code: Option<String>,
        name: impl Into<String>,
        level_type: Option<LevelType>,
    ) -> Self {
        Self {
            id,
            code,
            name: name.into(),
            level_type,
            options: Vec::new(),
        }
    }

    /// Placeholder options exist only to connect real values to their
    /// shared ancestors.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }

    /// Number of options in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self
            .options
            .iter()
            .map(DimensionOption::count)
            .sum::<usize>()
    }

    pub(crate) fn sort_key(&self) -> OptionKey {
        OptionKey::new(self.level_type.as_ref(), &self.name, self.code.as_deref())
    }
}

impl PartialEq for DimensionOption {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for DimensionOption {}

impl Ord for DimensionOption {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for DimensionOption {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for DimensionOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 1
            + usize::from(self.id.is_some())
            + usize::from(self.code.is_some())
            + usize::from(self.level_type.is_some())
            + usize::from(!self.options.is_empty())
            + usize::from(self.is_empty());
        let mut state = serializer.serialize_struct("DimensionOption", len)?;
        if let Some(id) = &self.id {
            state.serialize_field("id", id)?;
        }
        if let Some(code) = &self.code {
            state.serialize_field("code", code)?;
        }
        state.serialize_field("name", &self.name)?;
        if let Some(level_type) = &self.level_type {
            state.serialize_field("levelType", level_type)?;
        }
        if !self.options.is_empty() {
            state.serialize_field("options", &self.options)?;
        }
        if self.is_empty() {
            state.serialize_field("isEmpty", &true)?;
        }
        state.end()
    }
}

/// Ordering and dedup key for options: level ascending with absent level
/// types last, then level name, option name (both case-insensitive), then
/// code ascending with absent codes last.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct OptionKey {
    level: Option<(i32, String)>,
    name: String,
    code: Option<String>,
}

impl OptionKey {
    fn new(level_type: Option<&LevelType>, name: &str, code: Option<&str>) -> Self {
        Self {
            level: level_type.map(|lt| (lt.level, lt.name.to_lowercase())),
            name: name.to_lowercase(),
            code: code.map(str::to_owned),
        }
    }
}

impl Ord for OptionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_absent_last(self.level.as_ref(), other.level.as_ref())
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| cmp_absent_last(self.code.as_ref(), other.code.as_ref()))
    }
}

impl PartialOrd for OptionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn cmp_absent_last<T: Ord>(left: Option<&T>, right: Option<&T>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(level: Option<i32>, name: &str, code: Option<&str>) -> DimensionOption {
        DimensionOption::new(
            Some(Uuid::from_u128(7)),
            code.map(str::to_owned),
            name,
            level.map(|l| LevelType::new(l, "level")),
        )
    }

    #[test]
    fn orders_by_level_then_name_then_code() {
        let mut options = vec![
            option(None, "Beta", None),
            option(Some(1), "zed", Some("Z")),
            option(Some(0), "alpha", Some("A")),
            option(Some(1), "Alpha", Some("B")),
            option(Some(1), "alpha", Some("A")),
        ];
        options.sort();

        let names: Vec<(&Option<LevelType>, &str, Option<&str>)> = options
            .iter()
            .map(|o| (&o.level_type, o.name.as_str(), o.code.as_deref()))
            .collect();
        assert_eq!(names[0].1, "alpha");
        assert_eq!(names[0].0.as_ref().map(|lt| lt.level), Some(0));
        assert_eq!(names[1].2, Some("A"));
        assert_eq!(names[2].2, Some("B"));
        assert_eq!(names[3].1, "zed");
        // Options without a level type sort after everything levelled.
        assert_eq!(names[4].1, "Beta");
    }

    #[test]
    fn absent_codes_sort_last_within_a_name() {
        let mut options = vec![option(None, "Same", None), option(None, "same", Some("S"))];
        options.sort();
        assert_eq!(options[0].code.as_deref(), Some("S"));
        assert_eq!(options[1].code, None);
    }

    #[test]
    fn equality_is_structural() {
        let left = option(Some(1), "England", Some("E"));
        let mut right = option(Some(1), "ENGLAND", Some("E"));
        right.id = None;
        assert_eq!(left, right);
    }

    #[test]
    fn serializes_placeholders_with_is_empty() {
        let mut uk = DimensionOption::new(
            None,
            Some("UK".to_string()),
            "United Kingdom",
            Some(LevelType::new(0, "country")),
        );
        uk.options.push(DimensionOption::new(
            Some(Uuid::from_u128(9)),
            Some("E".to_string()),
            "England",
            None,
        ));

        let value = serde_json::to_value(&uk).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "code": "UK",
                "name": "United Kingdom",
                "levelType": {"level": 0, "name": "country"},
                "options": [
                    {"id": "00000000-0000-0000-0000-000000000009", "code": "E", "name": "England"}
                ],
                "isEmpty": true
            })
        );
    }
}
