//! Categorical attributes that can be dragged onto the pinboard.

#[cfg(test)]
#[path = "dimension_test.rs"]
mod dimension_test;

use serde::{Deserialize, Serialize};

/// Value kind of a dimension. Closed set mirrored from the data cube schema.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKind {
    #[default]
    String,
    Boolean,
    Number,
    Time,
}

impl DimensionKind {
    /// Whether pinned tiles can summarize values of this kind.
    #[must_use]
    pub fn is_pinnable(self) -> bool {
        matches!(self, Self::String | Self::Boolean)
    }
}

/// A single attribute of the data cube.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    /// Unique name within the cube; the key used by the pinned set.
    pub name: String,
    /// Human-readable label. Falls back to `name` when absent.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub kind: DimensionKind,
}

impl Dimension {
    pub fn new(name: impl Into<String>, kind: DimensionKind) -> Self {
        Self { name: name.into(), title: None, kind }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Label shown on the pinned tile header.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}
