//! Pinboard display configuration.
//!
//! Hosts may ship a JSON blob to override panel strings. Missing fields keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Pinboard";
pub const DEFAULT_PLACEHOLDER_MESSAGE: &str = "Click or drag dimensions to pin them";
pub const DEFAULT_NO_SORT_LABEL: &str = "No sort measure";
pub const DEFAULT_DROP_INDICATOR_LABEL: &str = "Drop to pin";

/// Error returned by [`PinboardConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse pinboard config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("pinboard config field '{0}' must not be empty")]
    EmptyField(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinboardConfig {
    /// Heading of the sort-measure tile.
    pub title: String,
    /// Message under the empty-state icon.
    pub placeholder_message: String,
    /// Selector entry meaning "no sort measure".
    pub no_sort_label: String,
    /// Text inside the drop indicator tile shown while hovering.
    pub drop_indicator_label: String,
}

impl Default for PinboardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            placeholder_message: DEFAULT_PLACEHOLDER_MESSAGE.to_owned(),
            no_sort_label: DEFAULT_NO_SORT_LABEL.to_owned(),
            drop_indicator_label: DEFAULT_DROP_INDICATOR_LABEL.to_owned(),
        }
    }
}

impl PinboardConfig {
    /// Parse a config blob, falling back to defaults for absent fields.
    ///
    /// # Errors
    ///
    /// Malformed JSON, or a field explicitly set to a blank string.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("title", &self.title),
            ("placeholder_message", &self.placeholder_message),
            ("no_sort_label", &self.no_sort_label),
            ("drop_indicator_label", &self.drop_indicator_label),
        ];
        match fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::EmptyField(name)),
            None => Ok(()),
        }
    }
}
