//! Panel-local state.
//!
//! DESIGN
//! ======
//! Only transient presentation state lives here. Domain data (pinned set,
//! sort measure) stays with the host and arrives as a
//! [`crate::model::PinboardSnapshot`].

pub mod gesture;
pub mod pinboard;
