//! Leptos components for the pinboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are thin: drag decisions live in `state`, lookups in `model`,
//! and the legend channel in `util::teleporter`. Everything the panel changes
//! goes through the injected `PinboardActions`.

pub mod dimension_chip;
pub mod legend;
pub mod pinboard_panel;
pub mod pinned_tile;
pub mod sort_measure_tile;
