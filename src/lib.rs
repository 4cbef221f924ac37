//! # pinboard
//!
//! Leptos pinboard panel for a data-exploration UI. Users drag categorical
//! dimensions onto the panel to pin them; each pinned dimension becomes a tile
//! sorted by a selectable measure.
//!
//! The crate holds the drop-eligibility rule, the drag-over state machine, a
//! single-slot "teleporter" channel used to render the visualization legend
//! inside the panel, and the components wiring them together. Dimension data,
//! the pinned set and the command dispatcher belong to the host and are
//! injected.

pub mod actions;
pub mod components;
pub mod config;
pub mod model;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;
