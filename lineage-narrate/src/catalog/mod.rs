//! Template catalog: the key space, the built-in English text, and
//! per-key overrides.

mod english;
mod keys;

pub use keys::{
    all_reachable, BirthKey, DeathKey, NameForm, ParentSet, ParentageForm, ParentageKey, Phrasing,
    Rite, RiteKey, TemplateKey, Tense, UnionDetail, UnionKey, UnionKind, UnionOrder, UnionPhrasing,
};

use std::collections::HashMap;

use lineage_core::errors::CatalogError;

use crate::render;

/// Catalog the narrator selects templates from.
///
/// Resolution falls back from registered overrides to the built-in
/// English text. Overrides are keyed by the dotted id of
/// [`TemplateKey::id`], which is how a host plugs in a translation table
/// without touching the selection logic.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    overrides: HashMap<String, String>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override for one key id.
    pub fn with_override(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), template.into());
        self
    }

    /// Register overrides in bulk.
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Template text for a key, `None` where no sentence exists.
    pub fn resolve(&self, key: &TemplateKey) -> Option<String> {
        if let Some(template) = self.overrides.get(&key.id()) {
            return Some(template.clone());
        }
        english::default_template(key)
    }

    /// Check the catalog against the reachable key space.
    ///
    /// Every reachable key must resolve, and every resolved template may
    /// only use known placeholders. Run this at host startup when override
    /// tables come from external files.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let keys = keys::all_reachable();

        let missing: Vec<String> = keys
            .iter()
            .filter(|key| self.resolve(key).is_none())
            .map(|key| key.id())
            .collect();
        if let Some(first) = missing.first() {
            return Err(CatalogError::MissingTemplates {
                count: missing.len(),
                first_missing: first.clone(),
            });
        }

        for key in &keys {
            if let Some(template) = self.resolve(key) {
                if let Some(token) = render::first_unknown_placeholder(&template) {
                    return Err(CatalogError::UnknownPlaceholder {
                        key: key.id(),
                        token,
                    });
                }
            }
        }
        Ok(())
    }
}
