//! Legend slot rendered by the pinboard but declared by the visualization.
//!
//! The visualization that knows what its legend looks like mounts
//! [`LegendSpot`]; the pinboard mounts [`LegendTarget`]. Both receive the same
//! [`Legend`] channel from their common host, so neither needs to know where
//! the other sits in the tree.

use leptos::prelude::*;

use crate::util::teleporter::Teleporter;

/// Channel carrying the current legend view.
pub type Legend = Teleporter<ViewFn>;

/// Renders whatever legend is currently declared, or nothing.
#[component]
pub fn LegendTarget(channel: Legend) -> impl IntoView {
    let content = RwSignal::new(None::<ViewFn>);
    let mount = channel.target().mount(move |declared: Option<&ViewFn>| content.set(declared.cloned()));
    // Disposed with this component's owner, which unsubscribes.
    let _mount = StoredValue::new_local(mount);

    view! {
        <div class="pinboard-legend">
            {move || content.get().map(|legend| legend.run())}
        </div>
    }
}

/// Declares `children` as the legend for as long as this component is mounted.
#[component]
pub fn LegendSpot(channel: Legend, children: ChildrenFn) -> impl IntoView {
    let mount = channel.source().mount(ViewFn::from(move || children()));
    let _mount = StoredValue::new_local(mount);
}
