//! Recorded places.

use serde::{Deserialize, Serialize};

/// A place an event happened at.
///
/// `title` is the long hierarchical form, `name` the short local form.
/// Which one a narration uses depends on the configured place format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Place {
    pub handle: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
}

impl Place {
    pub fn new(handle: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            handle: handle.into(),
            name: title.clone(),
            title,
        }
    }
}
