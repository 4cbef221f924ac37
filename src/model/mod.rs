//! Read-only domain model consumed by the pinboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dimensions, measures and the pinned set are owned by the surrounding
//! exploration app. The pinboard reads them and asks for changes through
//! [`crate::actions::PinboardActions`]; it never writes them itself.

pub mod data_cube;
pub mod dimension;
pub mod pinned;
pub mod snapshot;

pub use data_cube::{DataCube, Measure};
pub use dimension::{Dimension, DimensionKind};
pub use pinned::PinnedSet;
pub use snapshot::{PinboardCommand, PinboardSnapshot};
