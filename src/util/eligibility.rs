//! Drop eligibility for the pinboard.

#[cfg(test)]
#[path = "eligibility_test.rs"]
mod eligibility_test;

use crate::model::{Dimension, PinnedSet};

/// Whether dropping `candidate` on the pinboard would be accepted.
///
/// Only categorical (string or boolean) dimensions that are not already pinned
/// qualify.
#[must_use]
pub fn can_accept(candidate: &Dimension, pinned: &PinnedSet) -> bool {
    candidate.kind.is_pinnable() && !pinned.has(&candidate.name)
}

/// Narrow an optional drag candidate to one the pinboard accepts.
#[must_use]
pub fn eligible_candidate(candidate: Option<Dimension>, pinned: &PinnedSet) -> Option<Dimension> {
    candidate.filter(|d| can_accept(d, pinned))
}
