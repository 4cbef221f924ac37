//! Draggable dimension entry that feeds the shared drag tracker.

use leptos::prelude::*;

use crate::model::Dimension;
use crate::util::drag_tracker::DragTracker;

/// A dimension label that can be dragged onto the pinboard.
#[component]
pub fn DimensionChip(dimension: Dimension, tracker: DragTracker) -> impl IntoView {
    let title = dimension.display_title().to_owned();
    let end_tracker = tracker.clone();

    view! {
        <div
            class="dimension-chip"
            draggable="true"
            on:dragstart=move |_| tracker.begin(dimension.clone())
            on:dragend=move |_| end_tracker.end()
        >
            {title}
        </div>
    }
}
