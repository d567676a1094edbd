use lineage_core::config::NarrateConfig;
use lineage_core::display::{
    GregorianDateDisplay, IdentityLocale, StandardNameDisplay, TitlePlaceDisplay,
};
use lineage_core::models::{
    Date, DateQualifier, Event, EventKind, Family, Gender, Name, Person, Place, RelationKind,
};
use lineage_core::store::InMemoryTree;
use lineage_core::traits::IDateDisplay;
use lineage_narrate::render::has_unresolved;
use lineage_narrate::{classify_date, DateTier, Narrator, UnionOrder};
use proptest::prelude::*;

fn arb_qualifier() -> impl Strategy<Value = DateQualifier> {
    prop_oneof![
        Just(DateQualifier::None),
        Just(DateQualifier::About),
        Just(DateQualifier::Before),
        Just(DateQualifier::After),
        Just(DateQualifier::Estimated),
        Just(DateQualifier::Calculated),
    ]
}

/// Dates with deliberately out-of-range components mixed in.
fn arb_date() -> impl Strategy<Value = Date> {
    (0u16..=2100, 0u8..=13, 0u8..=32, arb_qualifier()).prop_map(|(year, month, day, qualifier)| {
        Date {
            year,
            month,
            day,
            qualifier,
        }
    })
}

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![
        Just(Gender::Male),
        Just(Gender::Female),
        Just(Gender::Unknown),
        Just(Gender::Other),
    ]
}

// ── Date classification ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn classification_priority_is_total(date in arb_date()) {
        match classify_date(&date) {
            DateTier::Modified => prop_assert!(date.is_qualified()),
            DateTier::Full => {
                prop_assert!(date.day_valid() && !date.is_qualified());
            }
            DateTier::Partial => {
                prop_assert!(date.year_valid() && !date.day_valid() && !date.is_qualified());
            }
            DateTier::Absent => {
                prop_assert!(!date.year_valid() && !date.is_qualified());
            }
        }
    }

    #[test]
    fn spans_are_antisymmetric(a in arb_date(), b in arb_date()) {
        let dates = GregorianDateDisplay::new();
        if dates.span_between(&a, &b).is_some() {
            prop_assert!(
                dates.span_between(&b, &a).is_none(),
                "both directions produced a span for {:?} / {:?}",
                a,
                b
            );
        }
    }
}

// ── Narration over random fact shapes ────────────────────────────────────

proptest! {
    #[test]
    fn narration_never_leaves_placeholders(
        birth_date in arb_date(),
        death_date in arb_date(),
        has_birth_place in any::<bool>(),
        has_death_place in any::<bool>(),
        gender in arb_gender(),
        verbose in any::<bool>(),
        use_full_date in any::<bool>(),
        include_age in any::<bool>(),
        first in "[A-Za-z]{0,12}",
        father in proptest::option::of("[A-Za-z]{1,10}"),
        mother in proptest::option::of("[A-Za-z]{1,10}"),
    ) {
        let mut tree = InMemoryTree::new();
        let mut person = Person {
            handle: "p-subject".to_string(),
            gender,
            name: Name::new(first, "Tester"),
            ..Person::default()
        };
        person.birth_ref = Some("e-birth".to_string());
        person.death_ref = Some("e-death".to_string());
        tree.add_person(person.clone());

        let mut birth = Event::new("e-birth", EventKind::Birth);
        birth.date = birth_date;
        if has_birth_place {
            birth.place = Some("pl-town".to_string());
        }
        tree.add_event(birth);

        let mut death = Event::new("e-death", EventKind::Death);
        death.date = death_date;
        if has_death_place {
            death.place = Some("pl-town".to_string());
        }
        tree.add_event(death);
        tree.add_place(Place::new("pl-town", "Utrecht"));

        let spouse = Person {
            handle: "p-spouse".to_string(),
            name: Name::new("Anna", "Bakker"),
            ..Person::default()
        };
        tree.add_person(spouse);
        let family = Family {
            handle: "f-1".to_string(),
            father: Some("p-subject".to_string()),
            mother: Some("p-spouse".to_string()),
            relation: RelationKind::Married,
            ..Family::default()
        };
        tree.add_family(family.clone());

        let dates = GregorianDateDisplay::new();
        let places = TitlePlaceDisplay::new();
        let names = StandardNameDisplay::new();
        let locale = IdentityLocale::default();
        let config = NarrateConfig {
            verbose,
            use_full_date,
            ..NarrateConfig::default()
        };
        let narrator = Narrator::new(&tree, &dates, &places, &names, &locale, config);
        let started_at_pronoun = person.name.first.is_empty();
        let mut session = narrator.start_subject(&person);
        prop_assert_eq!(session.name_used(), started_at_pronoun);

        let sentences = [
            narrator.birth_sentence(&mut session),
            narrator.death_sentence(&mut session, include_age),
            narrator.burial_sentence(&mut session),
            narrator.marriage_sentence(&mut session, &family, UnionOrder::First, None),
            narrator.parentage_sentence(&mut session, father.as_deref(), mother.as_deref()),
        ];
        for text in &sentences {
            prop_assert!(
                !has_unresolved(text),
                "unresolved placeholders survived in {:?}",
                text
            );
            if !text.is_empty() {
                prop_assert!(text.ends_with(' '), "missing separator in {:?}", text);
                prop_assert!(!text.ends_with("  "), "double separator in {:?}", text);
            }
        }

        // The session advances exactly once per non-empty sentence, and the
        // name turn is spent if and only if something rendered (or there was
        // no name to begin with).
        let rendered = sentences.iter().filter(|text| !text.is_empty()).count();
        prop_assert_eq!(session.sentences_rendered, rendered);
        prop_assert_eq!(
            session.name_used(),
            started_at_pronoun || rendered > 0
        );
    }
}
