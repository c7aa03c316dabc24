//! Controller configuration: storage key, DOM hooks, media query, and labels.
//!
//! Defaults match the page contract: `localStorage["theme"]`, a `data-theme`
//! attribute on `<html>`, and a `[data-toggle]` control. Hosts that need
//! different hooks can embed a JSON object and load it with [`ThemeConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::Theme;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_SELECTOR: &str = "[data-toggle]";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DEFAULT_LIGHTEN_LABEL: &str = "Lighten";
pub const DEFAULT_DARKEN_LABEL: &str = "Darken";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key of the persisted preference in client-local storage.
    pub storage_key: String,
    /// Attribute written on the document root element.
    pub attribute: String,
    /// CSS selector locating the toggle control.
    pub toggle_selector: String,
    /// Media query reporting the OS dark-mode preference.
    pub media_query: String,
    /// Label shown while the dark theme is applied.
    pub lighten_label: String,
    /// Label shown otherwise.
    pub darken_label: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
            lighten_label: DEFAULT_LIGHTEN_LABEL.to_owned(),
            darken_label: DEFAULT_DARKEN_LABEL.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON object; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty DOM hooks and storage keys.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("attribute", &self.attribute),
            ("toggle_selector", &self.toggle_selector),
            ("media_query", &self.media_query),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Label for the control given the raw root attribute value.
    ///
    /// The label names the next action, so only an exact `dark` reads as "Lighten".
    pub fn label_for(&self, applied: Option<&str>) -> &str {
        if applied == Some(Theme::Dark.as_str()) {
            &self.lighten_label
        } else {
            &self.darken_label
        }
    }
}
