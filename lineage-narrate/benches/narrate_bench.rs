use criterion::{criterion_group, criterion_main, Criterion};

use lineage_core::config::NarrateConfig;
use lineage_core::display::{
    GregorianDateDisplay, IdentityLocale, StandardNameDisplay, TitlePlaceDisplay,
};
use lineage_core::models::{
    Date, DateQualifier, Event, EventKind, EventRef, EventRole, Family, Gender, Name, Person,
    Place, RelationKind,
};
use lineage_core::store::InMemoryTree;
use lineage_narrate::{classify_date, DateTier, Narrator, TemplateCatalog, UnionOrder};

fn dated_event(handle: &str, kind: EventKind, date: Date, place: Option<&str>) -> Event {
    let mut event = Event::new(handle, kind);
    event.date = date;
    event.place = place.map(String::from);
    event
}

/// A subject with the full set of narratable facts recorded.
fn build_lifecycle_tree() -> (InMemoryTree, Person, Family) {
    let mut tree = InMemoryTree::new();
    let mut person = Person {
        handle: "p-subject".to_string(),
        gender: Gender::Male,
        name: Name::new("Jan", "de Vries"),
        ..Person::default()
    };
    person.birth_ref = Some("e-birth".to_string());
    person.death_ref = Some("e-death".to_string());
    person.event_refs.push(EventRef::primary("e-baptism"));
    person.event_refs.push(EventRef::primary("e-burial"));
    person.family_refs.push("f-1".to_string());
    tree.add_person(person.clone());

    let spouse = Person {
        handle: "p-anna".to_string(),
        gender: Gender::Female,
        name: Name::new("Anna", "Bakker"),
        ..Person::default()
    };
    tree.add_person(spouse);

    tree.add_event(dated_event(
        "e-birth",
        EventKind::Birth,
        Date::new(1850, 3, 4),
        Some("pl-utrecht"),
    ));
    tree.add_event(dated_event(
        "e-baptism",
        EventKind::Baptism,
        Date::new(1850, 3, 10),
        Some("pl-utrecht"),
    ));
    tree.add_event(dated_event(
        "e-marriage",
        EventKind::Marriage,
        Date::new(1875, 5, 20),
        Some("pl-amsterdam"),
    ));
    tree.add_event(dated_event(
        "e-death",
        EventKind::Death,
        Date::new(1910, 1, 2),
        Some("pl-utrecht"),
    ));
    tree.add_event(dated_event(
        "e-burial",
        EventKind::Burial,
        Date::new(1910, 1, 6),
        Some("pl-utrecht"),
    ));
    tree.add_place(Place::new("pl-utrecht", "Utrecht"));
    tree.add_place(Place::new("pl-amsterdam", "Amsterdam"));

    let mut family = Family {
        handle: "f-1".to_string(),
        father: Some("p-subject".to_string()),
        mother: Some("p-anna".to_string()),
        relation: RelationKind::Married,
        ..Family::default()
    };
    family.event_refs.push(EventRef {
        event: "e-marriage".to_string(),
        role: EventRole::Family,
    });
    tree.add_family(family.clone());

    (tree, person, family)
}

fn bench_full_subject(c: &mut Criterion) {
    let (tree, person, family) = build_lifecycle_tree();
    let dates = GregorianDateDisplay::new();
    let places = TitlePlaceDisplay::new();
    let names = StandardNameDisplay::new();
    let locale = IdentityLocale::default();
    let config = NarrateConfig {
        use_full_date: true,
        ..NarrateConfig::default()
    };
    let narrator = Narrator::new(&tree, &dates, &places, &names, &locale, config);

    c.bench_function("narrate_full_subject", |b| {
        b.iter(|| {
            let mut session = narrator.start_subject(&person);
            let mut biography = String::new();
            biography.push_str(&narrator.birth_sentence(&mut session));
            biography.push_str(&narrator.baptism_sentence(&mut session));
            biography.push_str(&narrator.parentage_sentence(
                &mut session,
                Some("Willem de Vries"),
                Some("Maria Jansen"),
            ));
            biography.push_str(&narrator.marriage_sentence(
                &mut session,
                &family,
                UnionOrder::First,
                None,
            ));
            biography.push_str(&narrator.death_sentence(&mut session, true));
            biography.push_str(&narrator.burial_sentence(&mut session));
            biography.push_str(&narrator.witnesses_text(&session));
            biography
        });
    });
}

fn bench_classification(c: &mut Criterion) {
    let dates = [
        Date::new(1850, 3, 4),
        Date::new(1850, 3, 0),
        Date::year_only(1850),
        Date::default(),
        Date::new(1850, 3, 4).with_qualifier(DateQualifier::About),
        Date::new(1850, 13, 40),
    ];

    c.bench_function("classify_date_grid", |b| {
        b.iter(|| {
            dates
                .iter()
                .filter(|date| classify_date(date) == DateTier::Full)
                .count()
        });
    });
}

fn bench_catalog_validation(c: &mut Criterion) {
    c.bench_function("catalog_validate", |b| {
        let catalog = TemplateCatalog::new();
        b.iter(|| catalog.validate().is_ok());
    });
}

criterion_group!(
    benches,
    bench_full_subject,
    bench_classification,
    bench_catalog_validation
);
criterion_main!(benches);
