//! Ordered set of pinned dimension names.

#[cfg(test)]
#[path = "pinned_test.rs"]
mod pinned_test;

use serde::{Deserialize, Serialize};

/// Names of pinned dimensions, unique, in pin order.
///
/// Pin order is display order. The panel only reads this set; inserts and
/// removals happen in the domain dispatcher.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PinnedSet {
    names: Vec<String>,
}

impl PinnedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Append `name` unless already present. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove `name`, keeping the order of the rest. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PinnedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl From<Vec<String>> for PinnedSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<PinnedSet> for Vec<String> {
    fn from(set: PinnedSet) -> Self {
        set.names
    }
}
