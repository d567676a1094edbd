//! Life events referenced from people and families.

use serde::{Deserialize, Serialize};

use super::Date;

/// Kind of life event the narration engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Birth,
    Death,
    Burial,
    Baptism,
    Christening,
    Marriage,
    #[default]
    Other,
}

/// A recorded event: what happened, when, where, and with what notes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Event {
    pub handle: String,
    #[serde(default)]
    pub kind: EventKind,
    #[serde(default)]
    pub date: Date,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub citations: Vec<String>,
}

impl Event {
    pub fn new(handle: impl Into<String>, kind: EventKind) -> Self {
        Self {
            handle: handle.into(),
            kind,
            ..Self::default()
        }
    }
}
