use super::*;
use crate::model::{DataCube, Measure, PinnedSet};

fn snapshot(sort: Option<&str>) -> PinboardSnapshot {
    let cube = DataCube::new(vec![], vec![Measure::new("count").with_title("Count"), Measure::new("delta")]);
    PinboardSnapshot { data_cube: cube, pinned: PinnedSet::new(), pinned_sort_measure: sort.map(str::to_owned) }
}

#[test]
fn options_start_with_none_entry() {
    let opts = sort_options(&snapshot(None), "None");
    assert_eq!(opts.len(), 3);
    assert_eq!(opts[0], SortOption { key: String::new(), label: "None".into(), selected: true });
    assert_eq!(opts[1].label, "Count");
    assert_eq!(opts[2].label, "delta");
    assert!(!opts[1].selected && !opts[2].selected);
}

#[test]
fn current_sort_measure_is_selected() {
    let opts = sort_options(&snapshot(Some("delta")), "None");
    let selected: Vec<_> = opts.iter().filter(|o| o.selected).map(|o| o.key.as_str()).collect();
    assert_eq!(selected, vec!["delta"]);
}

#[test]
fn unknown_sort_measure_selects_none_entry() {
    let opts = sort_options(&snapshot(Some("removed")), "None");
    assert!(opts[0].selected);
    assert_eq!(opts.iter().filter(|o| o.selected).count(), 1);
}
