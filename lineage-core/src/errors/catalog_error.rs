/// Template catalog errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("missing templates for {count} reachable keys, first: {first_missing}")]
    MissingTemplates { count: usize, first_missing: String },

    #[error("template for {key} carries unknown placeholder: {token}")]
    UnknownPlaceholder { key: String, token: String },
}
