//! Framework-independent helpers behind the pinboard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here touches the DOM, so eligibility, drag tracking and the
//! teleporter channel are all unit-testable without a browser.

pub mod drag_tracker;
pub mod eligibility;
pub mod teleporter;
