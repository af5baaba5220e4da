//! Behavioural tests for the list and hierarchy views.

use ddm_model::{DimensionValue, Hierarchy, HierarchyEntry, LevelType};
use ddm_view::{DimensionOption, DimensionView};
use serde_json::json;
use uuid::Uuid;

const UK: Uuid = Uuid::from_u128(1);
const EW: Uuid = Uuid::from_u128(2);
const ENGLAND: Uuid = Uuid::from_u128(3);
const WALES: Uuid = Uuid::from_u128(4);
const SCOTLAND: Uuid = Uuid::from_u128(5);

fn entry(
    id: Uuid,
    code: &str,
    name: &str,
    level: i32,
    level_name: &str,
    parent: Option<Uuid>,
) -> HierarchyEntry {
    HierarchyEntry {
        id,
        code: code.to_string(),
        name: name.to_string(),
        level_type: Some(LevelType::new(level, level_name)),
        parent,
    }
}

fn geography() -> Hierarchy {
    let mut hierarchy = Hierarchy::new("geography", "Geography", "geography");
    hierarchy.insert_entry(entry(UK, "UK", "United Kingdom", 0, "country", None));
    hierarchy.insert_entry(entry(EW, "EW", "England and Wales", 1, "group", Some(UK)));
    hierarchy.insert_entry(entry(ENGLAND, "E", "England", 2, "nation", Some(EW)));
    hierarchy.insert_entry(entry(WALES, "W", "Wales", 2, "nation", Some(EW)));
    hierarchy.insert_entry(entry(SCOTLAND, "S", "Scotland", 2, "nation", Some(UK)));
    hierarchy
}

fn value(id: u128, entry: Uuid) -> DimensionValue {
    DimensionValue::hierarchical(Uuid::from_u128(id), entry)
}

fn count_non_empty(options: &[DimensionOption]) -> usize {
    options
        .iter()
        .map(|o| usize::from(!o.is_empty()) + count_non_empty(&o.options))
        .sum()
}

fn name_code_pairs(options: &[DimensionOption]) -> Vec<(String, Option<String>)> {
    let mut pairs: Vec<(String, Option<String>)> = options
        .iter()
        .map(|o| (o.name.clone(), o.code.clone()))
        .collect();
    pairs.sort();
    pairs
}

#[test]
fn none_always_returns_none() {
    let values = vec![
        DimensionValue::flat(Uuid::from_u128(0xb1), "1"),
        DimensionValue::flat(Uuid::from_u128(0xb2), "2"),
    ];
    assert!(DimensionView::None.convert(&values, None).is_none());
    assert!(DimensionView::None.convert(&[], None).is_none());
}

#[test]
fn list_returns_one_option_per_flat_value() {
    let values = vec![
        DimensionValue::flat(Uuid::from_u128(0xb1), "wales"),
        DimensionValue::flat(Uuid::from_u128(0xb2), "England"),
        DimensionValue::flat(Uuid::from_u128(0xb3), "Scotland"),
    ];
    let options = DimensionView::List.convert(&values, None).unwrap();

    assert_eq!(options.len(), values.len());
    assert!(options.iter().all(|o| o.options.is_empty()));
    // Sorted case-insensitively by name; code mirrors the raw value.
    let names: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["England", "Scotland", "wales"]);
    assert_eq!(options[0].code.as_deref(), Some("England"));
    assert!(options.iter().all(|o| !o.is_empty()));
}

#[test]
fn list_uses_entry_data_when_hierarchical() {
    let hierarchy = geography();
    let values = vec![value(0xb1, ENGLAND), value(0xb2, WALES)];
    let options = DimensionView::List
        .convert(&values, Some(&hierarchy))
        .unwrap();

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].name, "England");
    assert_eq!(options[0].code.as_deref(), Some("E"));
    assert_eq!(options[0].id, Some(Uuid::from_u128(0xb1)));
    assert_eq!(
        options[0].level_type,
        Some(LevelType::new(2, "nation".to_string()))
    );
}

#[test]
fn list_never_populates_children() {
    let hierarchy = geography();
    let values = vec![value(0xb1, ENGLAND), value(0xb2, WALES), value(0xb3, SCOTLAND)];
    let options = DimensionView::List
        .convert(&values, Some(&hierarchy))
        .unwrap();

    // The parent chain is ignored entirely: no UK or EW nodes appear.
    assert_eq!(options.len(), values.len());
    assert!(options.iter().all(|o| o.options.is_empty()));
}

#[test]
fn hierarchy_matches_list_for_flat_dimensions() {
    let values = vec![
        DimensionValue::flat(Uuid::from_u128(0xb1), "Male"),
        DimensionValue::flat(Uuid::from_u128(0xb2), "Female"),
    ];
    let list = DimensionView::List.convert(&values, None).unwrap();
    let tree = DimensionView::Hierarchy.convert(&values, None).unwrap();

    assert_eq!(name_code_pairs(&list), name_code_pairs(&tree));
    assert!(list.iter().all(|o| o.options.is_empty()));
    assert!(tree.iter().all(|o| o.options.is_empty()));
}

#[test]
fn hierarchy_rebuilds_missing_ancestors() {
    let hierarchy = geography();
    let values = vec![value(0xb1, ENGLAND)];
    let roots = DimensionView::Hierarchy
        .convert(&values, Some(&hierarchy))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&roots).unwrap(),
        json!([
            {
                "code": "UK",
                "name": "United Kingdom",
                "levelType": {"level": 0, "name": "country"},
                "options": [
                    {
                        "code": "EW",
                        "name": "England and Wales",
                        "levelType": {"level": 1, "name": "group"},
                        "options": [
                            {
                                "id": "00000000-0000-0000-0000-0000000000b1",
                                "code": "E",
                                "name": "England",
                                "levelType": {"level": 2, "name": "nation"}
                            }
                        ],
                        "isEmpty": true
                    }
                ],
                "isEmpty": true
            }
        ])
    );
}

#[test]
fn hierarchy_dedups_shared_ancestors() {
    let hierarchy = geography();
    let values = vec![value(0xb1, ENGLAND), value(0xb2, WALES)];
    let roots = DimensionView::Hierarchy
        .convert(&values, Some(&hierarchy))
        .unwrap();

    // One root, one EW option with both nations under it.
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].code.as_deref(), Some("UK"));
    assert_eq!(roots[0].options.len(), 1);
    let ew = &roots[0].options[0];
    assert_eq!(ew.code.as_deref(), Some("EW"));
    let names: Vec<&str> = ew.options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["England", "Wales"]);
}

#[test]
fn hierarchy_conserves_node_counts() {
    let hierarchy = geography();
    let values = vec![value(0xb1, ENGLAND), value(0xb2, WALES), value(0xb3, SCOTLAND)];
    let roots = DimensionView::Hierarchy
        .convert(&values, Some(&hierarchy))
        .unwrap();

    // Reachable entries: UK, EW, England, Wales, Scotland.
    let total: usize = roots.iter().map(DimensionOption::count).sum();
    assert_eq!(total, 5);
    assert_eq!(count_non_empty(&roots), values.len());
    assert_eq!(roots.len(), 1);
}

#[test]
fn sibling_sets_are_ordered() {
    let hierarchy = geography();
    // Under UK, the level-1 EW group precedes the level-2 Scotland node
    // regardless of the order the values arrive in.
    let values = vec![value(0xb3, SCOTLAND), value(0xb2, WALES), value(0xb1, ENGLAND)];
    let roots = DimensionView::Hierarchy
        .convert(&values, Some(&hierarchy))
        .unwrap();

    assert_eq!(roots.len(), 1);
    let uk_children: Vec<&str> = roots[0].options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(uk_children, vec!["England and Wales", "Scotland"]);
    let ew_children: Vec<&str> = roots[0].options[0]
        .options
        .iter()
        .map(|o| o.name.as_str())
        .collect();
    assert_eq!(ew_children, vec!["England", "Wales"]);
}

#[test]
fn bare_entries_render_as_placeholders() {
    let hierarchy = geography();
    let values: Vec<DimensionValue> = hierarchy
        .entries()
        .map(|e| DimensionValue::from_entry(e.id))
        .collect();
    let roots = DimensionView::Hierarchy
        .convert(&values, Some(&hierarchy))
        .unwrap();

    fn all_empty(options: &[DimensionOption]) -> bool {
        options.iter().all(|o| o.is_empty() && all_empty(&o.options))
    }
    assert_eq!(roots.len(), 1);
    let total: usize = roots.iter().map(DimensionOption::count).sum();
    assert_eq!(total, 5);
    assert!(all_empty(&roots));
}

#[test]
fn ancestor_that_is_a_value_is_not_empty() {
    let hierarchy = geography();
    let values = vec![value(0xb1, ENGLAND), value(0xb2, EW)];
    let roots = DimensionView::Hierarchy
        .convert(&values, Some(&hierarchy))
        .unwrap();

    assert_eq!(roots.len(), 1);
    assert!(roots[0].is_empty());
    let ew = &roots[0].options[0];
    assert_eq!(ew.id, Some(Uuid::from_u128(0xb2)));
    assert!(!ew.is_empty());
}

#[test]
fn flat_values_stand_alone_among_hierarchical_ones() {
    let hierarchy = geography();
    let values = vec![
        DimensionValue::flat(Uuid::from_u128(0xb9), "Total"),
        value(0xb1, ENGLAND),
    ];
    let roots = DimensionView::Hierarchy
        .convert(&values, Some(&hierarchy))
        .unwrap();

    // Roots keep first-encounter order: the standalone value, then UK.
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].name, "Total");
    assert!(roots[0].options.is_empty());
    assert!(!roots[0].is_empty());
    assert_eq!(roots[1].code.as_deref(), Some("UK"));
}

#[test]
fn duplicate_values_for_one_entry_collapse() {
    let hierarchy = geography();
    let values = vec![value(0xb1, ENGLAND), value(0xb9, ENGLAND)];
    let roots = DimensionView::Hierarchy
        .convert(&values, Some(&hierarchy))
        .unwrap();

    assert_eq!(roots.len(), 1);
    let ew = &roots[0].options[0];
    assert_eq!(ew.options.len(), 1);
    // The first value's id wins.
    assert_eq!(ew.options[0].id, Some(Uuid::from_u128(0xb1)));
}

#[test]
fn value_order_does_not_change_the_tree() {
    let hierarchy = geography();
    let forward = vec![value(0xb1, ENGLAND), value(0xb2, WALES), value(0xb3, SCOTLAND)];
    let reverse: Vec<DimensionValue> = forward.iter().rev().cloned().collect();

    let a = DimensionView::Hierarchy
        .convert(&forward, Some(&hierarchy))
        .unwrap();
    let b = DimensionView::Hierarchy
        .convert(&reverse, Some(&hierarchy))
        .unwrap();
    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}
