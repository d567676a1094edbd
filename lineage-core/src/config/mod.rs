//! Narration configuration.

pub mod defaults;

mod narrate_config;

pub use narrate_config::NarrateConfig;
