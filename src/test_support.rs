//! Test doubles for the injected pinboard capabilities.

use std::sync::{Mutex, MutexGuard};

use crate::actions::{ActionError, PinboardActions};
use crate::model::{Dimension, Measure};

/// A call observed by [`RecordingActions`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Pin(String),
    Unpin(String),
    ChangeSort(Option<String>),
}

/// Dispatcher that records calls and optionally rejects all of them.
#[derive(Debug, Default)]
pub struct RecordingActions {
    calls: Mutex<Vec<Call>>,
    reject: bool,
}

impl RecordingActions {
    pub fn rejecting() -> Self {
        Self { calls: Mutex::default(), reject: true }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Call>> {
        match self.calls.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn record(&self, call: Call) -> Result<(), ActionError> {
        self.lock().push(call);
        if self.reject { Err(ActionError::Unavailable("rejected by test".into())) } else { Ok(()) }
    }
}

impl PinboardActions for RecordingActions {
    fn pin(&self, dimension: &Dimension) -> Result<(), ActionError> {
        self.record(Call::Pin(dimension.name.clone()))
    }

    fn unpin(&self, dimension: &Dimension) -> Result<(), ActionError> {
        self.record(Call::Unpin(dimension.name.clone()))
    }

    fn change_pinned_sort_measure(&self, measure: Option<&Measure>) -> Result<(), ActionError> {
        self.record(Call::ChangeSort(measure.map(|m| m.name.clone())))
    }
}
