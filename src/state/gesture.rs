//! Drives [`DragState`] from native drag events and commits accepted drops.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use tracing::{debug, info, warn};

use super::pinboard::{DragPhase, DragState};
use crate::actions::PinboardActions;
use crate::model::PinnedSet;
use crate::util::drag_tracker::DragCandidateSource;
use crate::util::eligibility::eligible_candidate;

/// What the event handler should do after a phase was processed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureResponse {
    /// Call `preventDefault()` on the native event.
    pub prevent_default: bool,
    /// Drop-zone highlight after this phase.
    pub hovering: bool,
}

/// Per-panel drag controller.
///
/// Each phase asks `candidates` what is being dragged, checks eligibility
/// against the pinned set, advances the state machine and, on an accepted
/// drop, asks `actions` to pin the candidate. Never fails: dispatcher errors
/// are logged and hovering is cleared regardless.
#[derive(Debug)]
pub struct DragGestureController<S, A> {
    state: DragState,
    candidates: S,
    actions: A,
}

impl<S: DragCandidateSource, A: PinboardActions> DragGestureController<S, A> {
    pub fn new(candidates: S, actions: A) -> Self {
        Self { state: DragState::default(), candidates, actions }
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.state.hovering
    }

    /// Process one native drag phase.
    pub fn handle(&mut self, phase: DragPhase, pinned: &PinnedSet) -> GestureResponse {
        let candidate = eligible_candidate(self.candidates.current_drag_candidate(), pinned);
        let transition = self.state.transition(phase, candidate.as_ref());
        self.state = transition.state;

        if let Some(dimension) = &candidate {
            debug!(?phase, dimension = %dimension.name, hovering = self.state.hovering, "pinboard drag phase");
        }

        if let Some(dimension) = transition.commit {
            match self.actions.pin(&dimension) {
                Ok(()) => info!(dimension = %dimension.name, "dimension pinned"),
                Err(e) => warn!(error = %e, dimension = %dimension.name, "pin request failed"),
            }
        }

        GestureResponse { prevent_default: transition.prevent_default, hovering: self.state.hovering }
    }

    pub fn drag_enter(&mut self, pinned: &PinnedSet) -> GestureResponse {
        self.handle(DragPhase::Enter, pinned)
    }

    pub fn drag_over(&mut self, pinned: &PinnedSet) -> GestureResponse {
        self.handle(DragPhase::Over, pinned)
    }

    pub fn drag_leave(&mut self, pinned: &PinnedSet) -> GestureResponse {
        self.handle(DragPhase::Leave, pinned)
    }

    pub fn drag_drop(&mut self, pinned: &PinnedSet) -> GestureResponse {
        self.handle(DragPhase::Drop, pinned)
    }
}
