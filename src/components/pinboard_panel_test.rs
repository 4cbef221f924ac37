use super::*;
use crate::model::{DimensionKind, PinnedSet};
use crate::test_support::{Call, RecordingActions};

fn cube() -> DataCube {
    DataCube::new(
        vec![Dimension::new("country", DimensionKind::String)],
        vec![Measure::new("count"), Measure::new("delta")],
    )
}

#[test]
fn select_sort_measure_forwards_resolved_measure() {
    let actions = RecordingActions::default();
    let measure = select_sort_measure(&actions, &cube(), "delta");
    assert_eq!(measure, Some(Measure::new("delta")));
    assert_eq!(actions.calls(), vec![Call::ChangeSort(Some("delta".into()))]);
}

#[test]
fn select_sort_measure_forwards_none_for_unknown_key() {
    let actions = RecordingActions::default();
    assert_eq!(select_sort_measure(&actions, &cube(), "nope"), None);
    assert_eq!(select_sort_measure(&actions, &cube(), ""), None);
    assert_eq!(actions.calls(), vec![Call::ChangeSort(None), Call::ChangeSort(None)]);
}

#[test]
fn select_sort_measure_swallows_dispatcher_errors() {
    let actions = RecordingActions::rejecting();
    assert_eq!(select_sort_measure(&actions, &cube(), "count"), Some(Measure::new("count")));
    assert_eq!(actions.calls().len(), 1);
}

#[test]
fn request_unpin_calls_dispatcher_once() {
    let actions = RecordingActions::default();
    request_unpin(&actions, &Dimension::new("country", DimensionKind::String));
    assert_eq!(actions.calls(), vec![Call::Unpin("country".into())]);

    let rejecting = RecordingActions::rejecting();
    request_unpin(&rejecting, &Dimension::new("country", DimensionKind::String));
    assert_eq!(rejecting.calls().len(), 1);
}

#[test]
fn panel_visuals_for_snapshot_tiles() {
    let snap = PinboardSnapshot::new(cube(), ["country", "unknown"].into_iter().collect::<PinnedSet>());
    let tiles = snap.pinned_tiles().len();
    assert_eq!(tiles, 1);
    assert!(!PanelVisuals::new(false, tiles).placeholder);
    assert!(PanelVisuals::new(false, PinboardSnapshot::default().pinned_tiles().len()).placeholder);
}
