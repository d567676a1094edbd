//! # lineage-core
//!
//! Foundation crate for the Lineage narration engine.
//! Defines the domain models, collaborator traits, errors, config, and
//! constants, plus in-memory reference implementations of every trait.
//! The narration engine crate depends on this.

pub mod config;
pub mod constants;
pub mod display;
pub mod errors;
pub mod models;
pub mod store;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NarrateConfig;
pub use errors::{CatalogError, ConfigError, LineageError, LineageResult};
pub use models::{Date, DateQualifier, Event, EventKind, Family, Gender, Person, Place};
pub use store::InMemoryTree;
