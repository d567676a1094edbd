//! In-memory tree store.
//!
//! Backs the test suite and small embedding hosts. Real deployments
//! implement [`ITreeStore`] over their own database instead.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Event, Family, Note, Person, Place};
use crate::traits::ITreeStore;

/// Serialized form of a whole tree, as stored in fixture files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeData {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub families: Vec<Family>,
}

/// Hash-map backed [`ITreeStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTree {
    people: HashMap<String, Person>,
    events: HashMap<String, Event>,
    places: HashMap<String, Place>,
    notes: HashMap<String, Note>,
    families: HashMap<String, Family>,
}

impl InMemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&mut self, person: Person) {
        self.people.insert(person.handle.clone(), person);
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.insert(event.handle.clone(), event);
    }

    pub fn add_place(&mut self, place: Place) {
        self.places.insert(place.handle.clone(), place);
    }

    pub fn add_note(&mut self, note: Note) {
        self.notes.insert(note.handle.clone(), note);
    }

    pub fn add_family(&mut self, family: Family) {
        self.families.insert(family.handle.clone(), family);
    }
}

impl From<TreeData> for InMemoryTree {
    fn from(data: TreeData) -> Self {
        let mut tree = InMemoryTree::new();
        for person in data.people {
            tree.add_person(person);
        }
        for event in data.events {
            tree.add_event(event);
        }
        for place in data.places {
            tree.add_place(place);
        }
        for note in data.notes {
            tree.add_note(note);
        }
        for family in data.families {
            tree.add_family(family);
        }
        tree
    }
}

impl ITreeStore for InMemoryTree {
    fn person(&self, handle: &str) -> Option<Person> {
        self.people.get(handle).cloned()
    }

    fn event(&self, handle: &str) -> Option<Event> {
        self.events.get(handle).cloned()
    }

    fn place(&self, handle: &str) -> Option<Place> {
        self.places.get(handle).cloned()
    }

    fn note(&self, handle: &str) -> Option<Note> {
        self.notes.get(handle).cloned()
    }

    fn family(&self, handle: &str) -> Option<Family> {
        self.families.get(handle).cloned()
    }
}
