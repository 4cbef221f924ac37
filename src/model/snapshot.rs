//! Domain view the panel renders from, and the commands that change it.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use serde::{Deserialize, Serialize};

use super::data_cube::{DataCube, Measure};
use super::dimension::Dimension;
use super::pinned::PinnedSet;
use crate::actions::ActionError;

/// Everything the pinboard needs to know about the current exploration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinboardSnapshot {
    pub data_cube: DataCube,
    #[serde(default)]
    pub pinned: PinnedSet,
    /// Name of the measure pinned tiles are sorted by.
    #[serde(default)]
    pub pinned_sort_measure: Option<String>,
}

/// A mutation request against the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PinboardCommand {
    Pin(Dimension),
    Unpin(Dimension),
    ChangePinnedSortMeasure(Option<Measure>),
}

impl PinboardSnapshot {
    pub fn new(data_cube: DataCube, pinned: PinnedSet) -> Self {
        Self { data_cube, pinned, pinned_sort_measure: None }
    }

    /// Dimensions to render as tiles, in pin order.
    ///
    /// Names the cube no longer knows are skipped rather than rendered empty.
    #[must_use]
    pub fn pinned_tiles(&self) -> Vec<&Dimension> {
        self.pinned.iter().filter_map(|name| self.data_cube.get_dimension(name)).collect()
    }

    /// The selected sort measure, if it still exists in the cube.
    #[must_use]
    pub fn pinned_sort_measure(&self) -> Option<&Measure> {
        self.pinned_sort_measure.as_deref().and_then(|name| self.data_cube.get_measure(name))
    }

    /// Apply `command` in place.
    ///
    /// # Errors
    ///
    /// Duplicate pins, unpinning something not pinned, pinning a non-categorical
    /// dimension and selecting a measure the cube does not have are rejected
    /// without changing the snapshot.
    pub fn apply(&mut self, command: PinboardCommand) -> Result<(), ActionError> {
        match command {
            PinboardCommand::Pin(dimension) => {
                if !dimension.kind.is_pinnable() {
                    return Err(ActionError::NotPinnable(dimension.name));
                }
                if !self.pinned.insert(dimension.name.clone()) {
                    return Err(ActionError::AlreadyPinned(dimension.name));
                }
            }
            PinboardCommand::Unpin(dimension) => {
                if !self.pinned.remove(&dimension.name) {
                    return Err(ActionError::NotPinned(dimension.name));
                }
            }
            PinboardCommand::ChangePinnedSortMeasure(None) => self.pinned_sort_measure = None,
            PinboardCommand::ChangePinnedSortMeasure(Some(measure)) => {
                if self.data_cube.get_measure(&measure.name).is_none() {
                    return Err(ActionError::UnknownMeasure(measure.name));
                }
                self.pinned_sort_measure = Some(measure.name);
            }
        }
        Ok(())
    }
}
