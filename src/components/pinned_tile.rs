//! Header chrome around a pinned dimension.
//!
//! The value summary inside the tile is rendered by the host; this component
//! owns the title and the close control.

use leptos::prelude::*;

use super::pinboard_panel::{SharedActions, request_unpin};
use crate::model::Dimension;

#[component]
pub fn PinnedTile(dimension: Dimension, actions: SharedActions) -> impl IntoView {
    let title = dimension.display_title().to_owned();

    view! {
        <div class="pinboard-tile">
            <div class="pinboard-tile__header">
                <span class="pinboard-tile__title">{title}</span>
                <button
                    class="pinboard-tile__close"
                    title="Unpin"
                    on:click=move |_| request_unpin(&*actions, &dimension)
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
