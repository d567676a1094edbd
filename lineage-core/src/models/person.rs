//! People and their links to events.

use serde::{Deserialize, Serialize};

use super::Gender;

/// Structured name of a person.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub surname: String,
    /// Informal name preferred in running text, when recorded.
    #[serde(default)]
    pub call: Option<String>,
}

impl Name {
    pub fn new(first: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            surname: surname.into(),
            call: None,
        }
    }
}

/// Role a person or family plays in a referenced event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventRole {
    #[default]
    Primary,
    Witness,
    Family,
    Other,
}

/// Reference from a person or family to an event, carrying the role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventRef {
    pub event: String,
    #[serde(default)]
    pub role: EventRole,
}

impl EventRef {
    pub fn primary(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            role: EventRole::Primary,
        }
    }
}

/// A person in the tree.
///
/// `birth_ref` and `death_ref` point directly at the vital events; other
/// life events are found by scanning `event_refs` in recorded order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    pub handle: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub name: Name,
    #[serde(default)]
    pub birth_ref: Option<String>,
    #[serde(default)]
    pub death_ref: Option<String>,
    #[serde(default)]
    pub event_refs: Vec<EventRef>,
    #[serde(default)]
    pub family_refs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_ref_defaults_to_primary_role() {
        let json = r#"{"event": "e1"}"#;
        let event_ref: EventRef = serde_json::from_str(json).unwrap();
        assert_eq!(event_ref.role, EventRole::Primary);
    }

    #[test]
    fn person_deserializes_with_minimal_fields() {
        let json = r#"{"handle": "p1"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.handle, "p1");
        assert_eq!(person.gender, Gender::Unknown);
        assert!(person.birth_ref.is_none());
        assert!(person.event_refs.is_empty());
    }
}
