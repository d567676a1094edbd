//! Free-form notes attached to events.

use serde::{Deserialize, Serialize};

/// A note: free text referenced from events by handle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Note {
    pub handle: String,
    #[serde(default)]
    pub text: String,
}

impl Note {
    pub fn new(handle: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            text: text.into(),
        }
    }
}
