//! Drag-over state machine and derived panel visuals.
//!
//! DESIGN
//! ======
//! The only state the pinboard owns is whether an acceptable drag is hovering
//! over it. Transitions are a pure function of (state, phase, eligible
//! candidate) so every gesture sequence can be checked without a browser. The
//! caller decides eligibility and executes the returned commit.

#[cfg(test)]
#[path = "pinboard_test.rs"]
mod pinboard_test;

use crate::model::Dimension;

/// Native drag phases the drop zone reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

/// Drop-zone state for one panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    pub hovering: bool,
}

/// Result of feeding one phase into [`DragState::transition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: DragState,
    /// Suppress the browser default for this event. Required on enter, over
    /// and drop for the platform to allow dropping.
    pub prevent_default: bool,
    /// Dimension to pin. Only ever set for an accepted drop.
    pub commit: Option<Dimension>,
}

impl Transition {
    fn ignored(state: DragState) -> Self {
        Self { state, prevent_default: false, commit: None }
    }
}

impl DragState {
    /// Advance the state machine.
    ///
    /// `eligible` is the drag candidate after the eligibility check; `None`
    /// makes every phase a no-op so the browser shows its own "no drop"
    /// feedback.
    #[must_use]
    pub fn transition(self, phase: DragPhase, eligible: Option<&Dimension>) -> Transition {
        let Some(candidate) = eligible else {
            return Transition::ignored(self);
        };
        match phase {
            DragPhase::Enter => Transition { state: Self { hovering: true }, prevent_default: true, commit: None },
            DragPhase::Over => Transition { state: self, prevent_default: true, commit: None },
            DragPhase::Leave => Transition { state: Self { hovering: false }, prevent_default: false, commit: None },
            // Drop clears hovering whether or not an enter was seen.
            DragPhase::Drop => Transition {
                state: Self { hovering: false },
                prevent_default: true,
                commit: Some(candidate.clone()),
            },
        }
    }
}

/// Which drop-zone overlays are visible.
///
/// Mask and indicator appear together while hovering; the empty-state
/// placeholder only when not hovering and there are no tiles. The two groups
/// never overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelVisuals {
    pub drag_mask: bool,
    pub drop_indicator: bool,
    pub placeholder: bool,
}

impl PanelVisuals {
    #[must_use]
    pub fn new(hovering: bool, tile_count: usize) -> Self {
        Self { drag_mask: hovering, drop_indicator: hovering, placeholder: !hovering && tile_count == 0 }
    }
}
