//! Marker configuration for the preloader element.
//!
//! The defaults match the page markup the indicator was written against:
//! an element with id `preloader` that animates in with `scale-in` and out
//! with `scale-out`.

use crate::error::{PreloaderError, Result};
use serde::{Deserialize, Serialize};

/// DOM id of the indicator element.
pub const DEFAULT_ELEMENT_ID: &str = "preloader";
/// Class marking the element as visible / entering.
pub const DEFAULT_VISIBLE_CLASS: &str = "scale-in";
/// Class marking the element as hidden / exiting.
pub const DEFAULT_HIDDEN_CLASS: &str = "scale-out";

/// Which element to drive and which classes to toggle on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreloaderConfig {
    /// DOM id used for element lookup
    pub element_id: String,
    /// Class added on HIDDEN -> VISIBLE
    pub visible_class: String,
    /// Class added on VISIBLE -> HIDDEN
    pub hidden_class: String,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            visible_class: DEFAULT_VISIBLE_CLASS.to_string(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_string(),
        }
    }
}

impl PreloaderConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// ```rust
    /// use preloader_core::PreloaderConfig;
    ///
    /// let config = PreloaderConfig::from_json(r#"{"elementId": "spinner"}"#).unwrap();
    /// assert_eq!(config.element_id, "spinner");
    /// assert_eq!(config.visible_class, "scale-in");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is set and the two markers are distinct.
    pub fn validate(&self) -> Result<()> {
        if self.element_id.trim().is_empty() {
            return Err(PreloaderError::InvalidConfig(
                "element id must not be empty".to_string(),
            ));
        }
        for (name, class) in [
            ("visible class", &self.visible_class),
            ("hidden class", &self.hidden_class),
        ] {
            if class.trim().is_empty() {
                return Err(PreloaderError::InvalidConfig(format!(
                    "{} must not be empty",
                    name
                )));
            }
            // DOMTokenList.add throws on whitespace
            if class.chars().any(char::is_whitespace) {
                return Err(PreloaderError::InvalidConfig(format!(
                    "{} must be a single class name, got '{}'",
                    name, class
                )));
            }
        }
        if self.visible_class == self.hidden_class {
            return Err(PreloaderError::InvalidConfig(format!(
                "visible and hidden classes must differ (both '{}')",
                self.visible_class
            )));
        }
        Ok(())
    }
}
