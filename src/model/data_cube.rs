//! Dimension and measure lookup for the active data cube.

#[cfg(test)]
#[path = "data_cube_test.rs"]
mod data_cube_test;

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;

/// A numeric aggregate that pinned tiles can be sorted by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Measure {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), title: None }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// Schema of the cube being explored: its dimensions and measures in
/// declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCube {
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default)]
    pub measures: Vec<Measure>,
}

impl DataCube {
    pub fn new(dimensions: Vec<Dimension>, measures: Vec<Measure>) -> Self {
        Self { dimensions, measures }
    }

    /// Look up a dimension by its unique name.
    #[must_use]
    pub fn get_dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    /// Look up a measure by its unique name.
    #[must_use]
    pub fn get_measure(&self, name: &str) -> Option<&Measure> {
        self.measures.iter().find(|m| m.name == name)
    }
}
