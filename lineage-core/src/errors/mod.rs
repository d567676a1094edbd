//! Error types shared across the workspace.

mod catalog_error;
mod config_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;

/// Convenience result alias used across the workspace.
pub type LineageResult<T> = Result<T, LineageError>;

/// Umbrella error for fallible lineage operations.
#[derive(Debug, thiserror::Error)]
pub enum LineageError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
