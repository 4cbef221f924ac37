//! Pinboard panel: drop zone for dimensions plus pinned tiles.
//!
//! ARCHITECTURE
//! ============
//! Native drag events go to a [`DragGestureController`] held in a
//! `StoredValue`; its `hovering` output is mirrored into a signal that drives
//! the overlays through [`PanelVisuals`]. While hovering, a full-area drag mask
//! sits on top of the tiles and receives over/leave/drop, so child elements
//! cannot produce spurious leave events.
//!
//! Domain changes (pin, unpin, sort measure) are requests to the injected
//! [`PinboardActions`]; the panel never edits the snapshot it renders.

#[cfg(test)]
#[path = "pinboard_panel_test.rs"]
mod pinboard_panel_test;

use std::sync::Arc;

use leptos::ev::DragEvent;
use leptos::prelude::*;
use tracing::warn;

use super::legend::{Legend, LegendTarget};
use super::pinned_tile::PinnedTile;
use super::sort_measure_tile::SortMeasureTile;
use crate::actions::PinboardActions;
use crate::config::PinboardConfig;
use crate::model::{DataCube, Dimension, Measure, PinboardSnapshot};
use crate::state::gesture::DragGestureController;
use crate::state::pinboard::{DragPhase, PanelVisuals};
use crate::util::drag_tracker::DragCandidateSource;

pub type SharedActions = Arc<dyn PinboardActions>;
pub type SharedCandidates = Arc<dyn DragCandidateSource>;

/// Resolve `key` against the cube and forward the result as the new sort
/// measure. Unknown keys are forwarded as "nothing selected".
pub fn select_sort_measure(actions: &dyn PinboardActions, cube: &DataCube, key: &str) -> Option<Measure> {
    let measure = cube.get_measure(key).cloned();
    if let Err(e) = actions.change_pinned_sort_measure(measure.as_ref()) {
        warn!(error = %e, key, "sort measure change failed");
    }
    measure
}

/// Ask the dispatcher to unpin `dimension`.
pub fn request_unpin(actions: &dyn PinboardActions, dimension: &Dimension) {
    if let Err(e) = actions.unpin(dimension) {
        warn!(error = %e, dimension = %dimension.name, "unpin request failed");
    }
}

/// Pinboard side panel: legend slot, sort-measure tile, pinned tiles and the
/// dimension drop zone.
///
/// Accepts a drop only for an unpinned string or boolean dimension reported by
/// `drag`, and turns it into a single `pin` request on `actions`.
#[component]
pub fn PinboardPanel(
    /// Domain view to render.
    #[prop(into)]
    snapshot: Signal<PinboardSnapshot>,
    /// Tells the panel what is being dragged.
    drag: SharedCandidates,
    /// Receives pin, unpin and sort-measure requests.
    actions: SharedActions,
    /// Legend channel; the panel renders its target.
    legend: Legend,
    #[prop(optional)] config: PinboardConfig,
    /// Inline style for the panel root.
    #[prop(optional, into)]
    style: Option<String>,
) -> impl IntoView {
    let controller = StoredValue::new(DragGestureController::new(drag, Arc::clone(&actions)));
    let hovering = RwSignal::new(false);

    let on_phase = move |phase: DragPhase, ev: &DragEvent| {
        let pinned = snapshot.with_untracked(|s| s.pinned.clone());
        let Some(response) = controller.try_update_value(|c| c.handle(phase, &pinned)) else {
            return;
        };
        if response.prevent_default {
            ev.prevent_default();
        }
        hovering.set(response.hovering);
    };

    let tiles = Memo::new(move |_| snapshot.with(|s| s.pinned_tiles().into_iter().cloned().collect::<Vec<_>>()));
    let visuals = move || PanelVisuals::new(hovering.get(), tiles.with(Vec::len));

    let PinboardConfig { title, placeholder_message, no_sort_label, drop_indicator_label } = config;
    let tile_actions = Arc::clone(&actions);

    view! {
        <div class="pinboard-panel" style=style on:dragenter=move |ev| on_phase(DragPhase::Enter, &ev)>
            <LegendTarget channel=legend/>
            <SortMeasureTile snapshot=snapshot actions=actions title=title no_sort_label=no_sort_label/>
            {move || {
                tiles
                    .get()
                    .into_iter()
                    .map(|dimension| view! { <PinnedTile dimension=dimension actions=Arc::clone(&tile_actions)/> })
                    .collect_view()
            }}
            <Show when=move || visuals().drop_indicator>
                <div class="drop-indicator-tile">{drop_indicator_label.clone()}</div>
            </Show>
            <Show when=move || visuals().placeholder>
                <div class="placeholder">
                    <div class="placeholder-message">{placeholder_message.clone()}</div>
                </div>
            </Show>
            <Show when=move || visuals().drag_mask>
                <div
                    class="drag-mask"
                    on:dragover=move |ev| on_phase(DragPhase::Over, &ev)
                    on:dragleave=move |ev| on_phase(DragPhase::Leave, &ev)
                    on:drop=move |ev| on_phase(DragPhase::Drop, &ev)
                ></div>
            </Show>
        </div>
    }
}
