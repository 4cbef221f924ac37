//! Mutation capability the pinboard uses to change domain state.
//!
//! DESIGN
//! ======
//! The pinboard is never the writer of the pinned set or the sort measure. It
//! hands commands to a [`PinboardActions`] implementation owned by the host and
//! treats every call as fire-and-forget: errors are logged, never propagated
//! into panel state.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::model::{Dimension, Measure, PinboardCommand, PinboardSnapshot};

/// Why the dispatcher refused a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("dimension '{0}' is already pinned")]
    AlreadyPinned(String),
    #[error("dimension '{0}' is not pinned")]
    NotPinned(String),
    #[error("dimension '{0}' cannot be pinned")]
    NotPinnable(String),
    #[error("unknown measure '{0}'")]
    UnknownMeasure(String),
    /// The domain state behind the dispatcher is unavailable.
    #[error("pinboard state unavailable: {0}")]
    Unavailable(String),
}

/// Commands the pinboard may request.
///
/// `Send + Sync` because implementations are captured by Leptos event handlers.
pub trait PinboardActions: Send + Sync {
    fn pin(&self, dimension: &Dimension) -> Result<(), ActionError>;

    fn unpin(&self, dimension: &Dimension) -> Result<(), ActionError>;

    /// `None` means "no sort measure selected".
    fn change_pinned_sort_measure(&self, measure: Option<&Measure>) -> Result<(), ActionError>;
}

impl<T: PinboardActions + ?Sized> PinboardActions for Arc<T> {
    fn pin(&self, dimension: &Dimension) -> Result<(), ActionError> {
        (**self).pin(dimension)
    }

    fn unpin(&self, dimension: &Dimension) -> Result<(), ActionError> {
        (**self).unpin(dimension)
    }

    fn change_pinned_sort_measure(&self, measure: Option<&Measure>) -> Result<(), ActionError> {
        (**self).change_pinned_sort_measure(measure)
    }
}

/// Dispatcher that applies commands to a snapshot held in a Leptos signal.
///
/// Hosts without a domain store of their own pass [`SnapshotActions::signal`]
/// as the panel's `snapshot` and the same value as its `actions`, so every
/// accepted command re-renders the panel and feeds the next eligibility check.
#[derive(Clone, Copy, Debug)]
pub struct SnapshotActions {
    snapshot: RwSignal<PinboardSnapshot>,
}

impl SnapshotActions {
    pub fn new(snapshot: PinboardSnapshot) -> Self {
        Self { snapshot: RwSignal::new(snapshot) }
    }

    /// Wrap a signal the host already owns.
    pub fn from_signal(snapshot: RwSignal<PinboardSnapshot>) -> Self {
        Self { snapshot }
    }

    /// Read-only view for the panel's `snapshot` prop.
    #[must_use]
    pub fn signal(&self) -> Signal<PinboardSnapshot> {
        self.snapshot.into()
    }

    /// Copy of the current snapshot. Empty once the signal is disposed.
    #[must_use]
    pub fn snapshot(&self) -> PinboardSnapshot {
        self.snapshot.try_get_untracked().unwrap_or_default()
    }

    /// Apply to a copy and publish only on success, so rejected commands do
    /// not notify subscribers.
    fn apply(&self, command: PinboardCommand) -> Result<(), ActionError> {
        let mut next = self
            .snapshot
            .try_get_untracked()
            .ok_or_else(|| ActionError::Unavailable("snapshot signal disposed".into()))?;
        next.apply(command)?;
        self.snapshot.set(next);
        Ok(())
    }
}

impl PinboardActions for SnapshotActions {
    fn pin(&self, dimension: &Dimension) -> Result<(), ActionError> {
        self.apply(PinboardCommand::Pin(dimension.clone()))
    }

    fn unpin(&self, dimension: &Dimension) -> Result<(), ActionError> {
        self.apply(PinboardCommand::Unpin(dimension.clone()))
    }

    fn change_pinned_sort_measure(&self, measure: Option<&Measure>) -> Result<(), ActionError> {
        self.apply(PinboardCommand::ChangePinnedSortMeasure(measure.cloned()))
    }
}
