//! Record lookups shared by the sentence builders.

use lineage_core::models::{Event, EventKind, EventRole, Family, Person};
use lineage_core::traits::ITreeStore;

/// First primary-role event of any of the given kinds, scanning the
/// person's references in recorded order. Dangling references are skipped.
pub(crate) fn primary_event_any(
    store: &dyn ITreeStore,
    person: &Person,
    kinds: &[EventKind],
) -> Option<Event> {
    person
        .event_refs
        .iter()
        .filter(|event_ref| event_ref.role == EventRole::Primary)
        .filter_map(|event_ref| store.event(&event_ref.event))
        .find(|event| kinds.contains(&event.kind))
}

pub(crate) fn primary_event(
    store: &dyn ITreeStore,
    person: &Person,
    kind: EventKind,
) -> Option<Event> {
    primary_event_any(store, person, &[kind])
}

/// The subject's partner in a family: whichever of the two parent slots
/// is not the subject.
pub(crate) fn spouse_handle(family: &Family, subject: &str) -> Option<String> {
    if family.father.as_deref() == Some(subject) {
        family.mother.clone()
    } else {
        family.father.clone()
    }
}

/// The family's marriage event, referenced with a family or primary role.
pub(crate) fn marriage_event(store: &dyn ITreeStore, family: &Family) -> Option<Event> {
    family
        .event_refs
        .iter()
        .filter(|event_ref| matches!(event_ref.role, EventRole::Family | EventRole::Primary))
        .filter_map(|event_ref| store.event(&event_ref.event))
        .find(|event| event.kind == EventKind::Marriage)
}

/// Text of the event's first resolvable non-empty note.
pub(crate) fn first_note_text(store: &dyn ITreeStore, event: &Event) -> Option<String> {
    event
        .notes
        .iter()
        .filter_map(|handle| store.note(handle))
        .map(|note| note.text)
        .find(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_core::models::{EventRef, Note};
    use lineage_core::store::InMemoryTree;

    #[test]
    fn primary_event_respects_role_and_order() {
        let mut tree = InMemoryTree::new();
        tree.add_event(Event::new("e-witnessed", EventKind::Baptism));
        tree.add_event(Event::new("e-own", EventKind::Baptism));

        let person = Person {
            handle: "p1".into(),
            event_refs: vec![
                EventRef {
                    event: "e-witnessed".into(),
                    role: EventRole::Witness,
                },
                EventRef::primary("e-dangling"),
                EventRef::primary("e-own"),
            ],
            ..Person::default()
        };

        let found = primary_event(&tree, &person, EventKind::Baptism).unwrap();
        assert_eq!(found.handle, "e-own");
        assert!(primary_event(&tree, &person, EventKind::Burial).is_none());
    }

    #[test]
    fn spouse_is_the_other_partner() {
        let family = Family {
            handle: "f1".into(),
            father: Some("p1".into()),
            mother: Some("p2".into()),
            ..Family::default()
        };
        assert_eq!(spouse_handle(&family, "p1").unwrap(), "p2");
        assert_eq!(spouse_handle(&family, "p2").unwrap(), "p1");

        let single = Family {
            handle: "f2".into(),
            father: Some("p1".into()),
            ..Family::default()
        };
        assert!(spouse_handle(&single, "p1").is_none());
    }

    #[test]
    fn marriage_event_needs_family_or_primary_role() {
        let mut tree = InMemoryTree::new();
        tree.add_event(Event::new("e-marriage", EventKind::Marriage));
        tree.add_event(Event::new("e-census", EventKind::Other));

        let family = Family {
            handle: "f1".into(),
            event_refs: vec![
                EventRef {
                    event: "e-census".into(),
                    role: EventRole::Family,
                },
                EventRef {
                    event: "e-marriage".into(),
                    role: EventRole::Family,
                },
            ],
            ..Family::default()
        };
        let found = marriage_event(&tree, &family).unwrap();
        assert_eq!(found.handle, "e-marriage");

        let witnessed_only = Family {
            handle: "f2".into(),
            event_refs: vec![EventRef {
                event: "e-marriage".into(),
                role: EventRole::Witness,
            }],
            ..Family::default()
        };
        assert!(marriage_event(&tree, &witnessed_only).is_none());
    }

    #[test]
    fn first_note_skips_dangling_and_empty() {
        let mut tree = InMemoryTree::new();
        tree.add_note(Note::new("n-empty", ""));
        tree.add_note(Note::new("n-text", "Witnesses: Piet and Anna."));

        let mut event = Event::new("e1", EventKind::Christening);
        event.notes = vec!["n-missing".into(), "n-empty".into(), "n-text".into()];
        assert_eq!(
            first_note_text(&tree, &event).unwrap(),
            "Witnesses: Piet and Anna."
        );

        let bare = Event::new("e2", EventKind::Christening);
        assert!(first_note_text(&tree, &bare).is_none());
    }
}
