//! Pinboard title tile with the sort-measure selector.

#[cfg(test)]
#[path = "sort_measure_tile_test.rs"]
mod sort_measure_tile_test;

use leptos::prelude::*;

use super::pinboard_panel::{SharedActions, select_sort_measure};
use crate::model::PinboardSnapshot;

/// One entry of the sort selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOption {
    /// Measure name, or empty for "no sort measure".
    pub key: String,
    pub label: String,
    pub selected: bool,
}

/// Selector entries: a leading "none" entry, then every cube measure.
pub fn sort_options(snapshot: &PinboardSnapshot, no_sort_label: &str) -> Vec<SortOption> {
    let current = snapshot.pinned_sort_measure().map(|m| m.name.as_str());
    let none = SortOption { key: String::new(), label: no_sort_label.to_owned(), selected: current.is_none() };
    std::iter::once(none)
        .chain(snapshot.data_cube.measures.iter().map(|m| SortOption {
            key: m.name.clone(),
            label: m.display_title().to_owned(),
            selected: current == Some(m.name.as_str()),
        }))
        .collect()
}

#[component]
pub fn SortMeasureTile(
    snapshot: Signal<PinboardSnapshot>,
    actions: SharedActions,
    title: String,
    no_sort_label: String,
) -> impl IntoView {
    let options = move || snapshot.with(|s| sort_options(s, &no_sort_label));
    let on_change = move |ev: leptos::ev::Event| {
        let key = event_target_value(&ev);
        snapshot.with_untracked(|s| select_sort_measure(&*actions, &s.data_cube, &key));
    };

    view! {
        <div class="pinboard-measure-tile">
            <div class="pinboard-measure-tile__title">{title}</div>
            <select class="pinboard-measure-tile__select" on:change=on_change>
                {move || {
                    options()
                        .into_iter()
                        .map(|opt| view! { <option value=opt.key selected=opt.selected>{opt.label}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
