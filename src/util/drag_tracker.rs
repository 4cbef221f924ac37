//! App-wide record of which dimension is being dragged.
//!
//! SYSTEM CONTEXT
//! ==============
//! Native drag events do not carry typed payloads across components. The
//! dimension list calls [`DragTracker::begin`] on `dragstart` and
//! [`DragTracker::end`] on `dragend`; drop targets such as the pinboard ask the
//! tracker what is in flight through [`DragCandidateSource`].

#[cfg(test)]
#[path = "drag_tracker_test.rs"]
mod drag_tracker_test;

use std::sync::{Arc, RwLock};

use crate::model::Dimension;

/// Query for the dimension currently being dragged, if any.
pub trait DragCandidateSource: Send + Sync {
    fn current_drag_candidate(&self) -> Option<Dimension>;
}

impl<T: DragCandidateSource + ?Sized> DragCandidateSource for Arc<T> {
    fn current_drag_candidate(&self) -> Option<Dimension> {
        (**self).current_drag_candidate()
    }
}

/// Shared drag slot. Clones observe the same slot.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    dragging: Arc<RwLock<Option<Dimension>>>,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `dimension` as the drag payload, replacing any previous one.
    pub fn begin(&self, dimension: Dimension) {
        tracing::trace!(dimension = %dimension.name, "drag started");
        self.replace(Some(dimension));
    }

    /// Clear the payload once the gesture ends (drop or cancel).
    pub fn end(&self) {
        tracing::trace!("drag ended");
        self.replace(None);
    }

    fn replace(&self, next: Option<Dimension>) {
        match self.dragging.write() {
            Ok(mut slot) => *slot = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

impl DragCandidateSource for DragTracker {
    fn current_drag_candidate(&self) -> Option<Dimension> {
        match self.dragging.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
