//! Family units linking partners and children.

use serde::{Deserialize, Serialize};

use super::EventRef;

/// Recorded relationship between the partners of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Married,
    Unmarried,
    CivilUnion,
    #[default]
    Unknown,
    Custom,
}

/// A family: up to two partners, their relationship, and their children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Family {
    pub handle: String,
    #[serde(default)]
    pub father: Option<String>,
    #[serde(default)]
    pub mother: Option<String>,
    #[serde(default)]
    pub relation: RelationKind,
    #[serde(default)]
    pub event_refs: Vec<EventRef>,
    #[serde(default)]
    pub children: Vec<String>,
}
