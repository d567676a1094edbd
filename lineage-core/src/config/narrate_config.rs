use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Narration subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrateConfig {
    /// Full sentences when true, compact report fragments when false.
    pub verbose: bool,
    /// Introduce the subject by call name when one is recorded.
    pub use_call_name: bool,
    /// Render complete dates; when false only the year is shown.
    pub use_full_date: bool,
    /// Placeholder substituted for missing dates. A non-empty value routes
    /// absent dates through the partial-date templates.
    pub empty_date: String,
    /// Placeholder substituted for missing places. A non-empty value routes
    /// absent places through the with-place templates.
    pub empty_place: String,
    /// Host-defined place display format selector.
    pub place_format: Option<i32>,
}

impl Default for NarrateConfig {
    fn default() -> Self {
        Self {
            verbose: defaults::DEFAULT_VERBOSE,
            use_call_name: defaults::DEFAULT_USE_CALL_NAME,
            use_full_date: defaults::DEFAULT_USE_FULL_DATE,
            empty_date: String::new(),
            empty_place: String::new(),
            place_format: None,
        }
    }
}

impl NarrateConfig {
    /// Parse a configuration from TOML text. Missing fields take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
