//! Structured keys addressing every sentence template.
//!
//! A key captures everything that changes the wording of a sentence: date
//! precision, place presence, the subject's presentation gender, whether
//! the subject is referenced by name or pronoun, verbose versus succinct
//! phrasing, and the family-specific axes such as age availability or
//! marriage order. [`all_reachable`] enumerates the keys selection can
//! actually produce, which is what catalog validation checks against.

use lineage_core::models::{EventKind, Gender, RelationKind};

use crate::classify::DateTier;

const ALL_TIERS: [DateTier; 4] = [
    DateTier::Absent,
    DateTier::Partial,
    DateTier::Full,
    DateTier::Modified,
];

const PRESENT_TIERS: [DateTier; 3] = [DateTier::Partial, DateTier::Full, DateTier::Modified];

const GENDERS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unknown];

/// How the subject is referenced in the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameForm {
    /// By display name, used for the first sentence about a subject.
    Name,
    /// By pronoun, once the name has already appeared.
    Pronoun,
}

/// Phrasing of a subject-led sentence.
///
/// Verbose phrasing is a complete sentence and needs the subject's gender
/// and name form; succinct phrasing is a clipped record-style fragment
/// shared across genders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrasing {
    Verbose { gender: Gender, form: NameForm },
    Succinct,
}

/// Key for a birth sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthKey {
    pub tier: DateTier,
    pub has_place: bool,
    pub phrasing: Phrasing,
}

/// Key for a death sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeathKey {
    pub tier: DateTier,
    pub has_place: bool,
    pub phrasing: Phrasing,
    /// Whether an age at death could be computed and is appended.
    pub with_age: bool,
}

/// The three funeral and initiation rites narrated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rite {
    Burial,
    Baptism,
    Christening,
}

impl Rite {
    /// Event kind this rite is recorded as.
    pub fn event_kind(&self) -> EventKind {
        match self {
            Rite::Burial => EventKind::Burial,
            Rite::Baptism => EventKind::Baptism,
            Rite::Christening => EventKind::Christening,
        }
    }

    pub(crate) fn date_placeholder(&self) -> &'static str {
        match self {
            Rite::Burial => "burial_date",
            Rite::Baptism => "baptism_date",
            Rite::Christening => "christening_date",
        }
    }

    pub(crate) fn place_placeholder(&self) -> &'static str {
        match self {
            Rite::Burial => "burial_place",
            Rite::Baptism => "baptism_place",
            Rite::Christening => "christening_place",
        }
    }

    pub(crate) fn verb(&self) -> &'static str {
        match self {
            Rite::Burial => "buried",
            Rite::Baptism => "baptised",
            Rite::Christening => "christened",
        }
    }

    fn id_segment(&self) -> &'static str {
        match self {
            Rite::Burial => "burial",
            Rite::Baptism => "baptism",
            Rite::Christening => "christening",
        }
    }
}

/// Key for a burial, baptism, or christening sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiteKey {
    pub rite: Rite,
    pub tier: DateTier,
    pub has_place: bool,
    pub phrasing: Phrasing,
}

/// Which parents a parentage sentence names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentSet {
    Both,
    FatherOnly,
    MotherOnly,
}

/// Grammatical tense, driven by whether the subject is probably alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Present,
    Past,
}

/// Phrasing of a parentage sentence.
///
/// Unlike the vitals, the succinct fragment stays gendered here ("Son of",
/// "Daughter of", "Child of"), so gender lives on [`ParentageKey`] rather
/// than inside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentageForm {
    Verbose { form: NameForm, tense: Tense },
    Succinct,
}

/// Key for a parentage sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParentageKey {
    pub parents: ParentSet,
    pub gender: Gender,
    pub form: ParentageForm,
}

/// Bucketed relationship kind for partner sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionKind {
    Married,
    Partnership,
    Relationship,
}

impl UnionKind {
    /// Bucket a recorded relation. Everything that is neither a marriage
    /// nor an explicit unmarried partnership narrates as a plain
    /// relationship.
    pub fn from_relation(relation: RelationKind) -> Self {
        match relation {
            RelationKind::Married => UnionKind::Married,
            RelationKind::Unmarried => UnionKind::Partnership,
            RelationKind::CivilUnion | RelationKind::Unknown | RelationKind::Custom => {
                UnionKind::Relationship
            }
        }
    }
}

/// Whether this is the first partner sentence for the subject or a
/// subsequent one ("also married").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionOrder {
    First,
    Also,
}

/// Date and place detail available for a partner sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionDetail {
    DatePlace(DateTier),
    DateOnly(DateTier),
    PlaceOnly,
    Neither,
}

/// Phrasing of a partner sentence. These never name the subject, so the
/// verbose form only carries gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionPhrasing {
    Verbose { gender: Gender },
    Succinct,
}

/// Key for a marriage or partnership sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnionKey {
    pub kind: UnionKind,
    pub order: UnionOrder,
    pub detail: UnionDetail,
    pub phrasing: UnionPhrasing,
}

/// Key for any template the narrator can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    Birth(BirthKey),
    Death(DeathKey),
    Rite(RiteKey),
    Parentage(ParentageKey),
    Union(UnionKey),
}

impl From<BirthKey> for TemplateKey {
    fn from(key: BirthKey) -> Self {
        TemplateKey::Birth(key)
    }
}

impl From<DeathKey> for TemplateKey {
    fn from(key: DeathKey) -> Self {
        TemplateKey::Death(key)
    }
}

impl From<RiteKey> for TemplateKey {
    fn from(key: RiteKey) -> Self {
        TemplateKey::Rite(key)
    }
}

impl From<ParentageKey> for TemplateKey {
    fn from(key: ParentageKey) -> Self {
        TemplateKey::Parentage(key)
    }
}

impl From<UnionKey> for TemplateKey {
    fn from(key: UnionKey) -> Self {
        TemplateKey::Union(key)
    }
}

impl TemplateKey {
    /// Stable dotted identifier, the form override tables are keyed by.
    ///
    /// Examples: `birth.full.place.verbose.male.name`,
    /// `death.absent.no_place.verbose.female.pronoun.age`,
    /// `union.married.also.date_place.modified.succinct`.
    pub fn id(&self) -> String {
        match self {
            TemplateKey::Birth(key) => format!(
                "birth.{}.{}.{}",
                tier_str(key.tier),
                place_str(key.has_place),
                phrasing_str(&key.phrasing),
            ),
            TemplateKey::Death(key) => format!(
                "death.{}.{}.{}.{}",
                tier_str(key.tier),
                place_str(key.has_place),
                phrasing_str(&key.phrasing),
                if key.with_age { "age" } else { "no_age" },
            ),
            TemplateKey::Rite(key) => format!(
                "{}.{}.{}.{}",
                key.rite.id_segment(),
                tier_str(key.tier),
                place_str(key.has_place),
                phrasing_str(&key.phrasing),
            ),
            TemplateKey::Parentage(key) => format!(
                "parentage.{}.{}.{}",
                match key.parents {
                    ParentSet::Both => "both",
                    ParentSet::FatherOnly => "father",
                    ParentSet::MotherOnly => "mother",
                },
                gender_str(key.gender),
                parentage_form_str(&key.form),
            ),
            TemplateKey::Union(key) => format!(
                "union.{}.{}.{}.{}",
                match key.kind {
                    UnionKind::Married => "married",
                    UnionKind::Partnership => "partnership",
                    UnionKind::Relationship => "relationship",
                },
                match key.order {
                    UnionOrder::First => "first",
                    UnionOrder::Also => "also",
                },
                union_detail_str(&key.detail),
                match &key.phrasing {
                    UnionPhrasing::Verbose { gender } => format!("verbose.{}", gender_str(*gender)),
                    UnionPhrasing::Succinct => "succinct".to_string(),
                },
            ),
        }
    }
}

fn tier_str(tier: DateTier) -> &'static str {
    match tier {
        DateTier::Absent => "absent",
        DateTier::Partial => "partial",
        DateTier::Full => "full",
        DateTier::Modified => "modified",
    }
}

fn place_str(has_place: bool) -> &'static str {
    if has_place {
        "place"
    } else {
        "no_place"
    }
}

fn gender_str(gender: Gender) -> &'static str {
    match gender.normalized() {
        Gender::Male => "male",
        Gender::Female => "female",
        _ => "unknown",
    }
}

fn form_str(form: NameForm) -> &'static str {
    match form {
        NameForm::Name => "name",
        NameForm::Pronoun => "pronoun",
    }
}

fn phrasing_str(phrasing: &Phrasing) -> String {
    match phrasing {
        Phrasing::Verbose { gender, form } => {
            format!("verbose.{}.{}", gender_str(*gender), form_str(*form))
        }
        Phrasing::Succinct => "succinct".to_string(),
    }
}

fn parentage_form_str(form: &ParentageForm) -> String {
    match form {
        ParentageForm::Verbose { form, tense } => format!(
            "verbose.{}.{}",
            form_str(*form),
            match tense {
                Tense::Present => "present",
                Tense::Past => "past",
            }
        ),
        ParentageForm::Succinct => "succinct".to_string(),
    }
}

fn union_detail_str(detail: &UnionDetail) -> String {
    match detail {
        UnionDetail::DatePlace(tier) => format!("date_place.{}", tier_str(*tier)),
        UnionDetail::DateOnly(tier) => format!("date.{}", tier_str(*tier)),
        UnionDetail::PlaceOnly => "place".to_string(),
        UnionDetail::Neither => "neither".to_string(),
    }
}

fn all_phrasings() -> Vec<Phrasing> {
    let mut out = Vec::with_capacity(7);
    for gender in GENDERS {
        for form in [NameForm::Name, NameForm::Pronoun] {
            out.push(Phrasing::Verbose { gender, form });
        }
    }
    out.push(Phrasing::Succinct);
    out
}

/// Every key the selection logic can produce.
///
/// Combinations selection never emits are left out: a birth with neither
/// date nor place renders nothing, and a succinct death with neither only
/// exists as the empty sentence.
pub fn all_reachable() -> Vec<TemplateKey> {
    let mut keys = Vec::new();

    for phrasing in all_phrasings() {
        for tier in PRESENT_TIERS {
            for has_place in [true, false] {
                keys.push(
                    BirthKey {
                        tier,
                        has_place,
                        phrasing,
                    }
                    .into(),
                );
            }
        }
        keys.push(
            BirthKey {
                tier: DateTier::Absent,
                has_place: true,
                phrasing,
            }
            .into(),
        );
    }

    for phrasing in all_phrasings() {
        for with_age in [false, true] {
            for tier in PRESENT_TIERS {
                for has_place in [true, false] {
                    keys.push(
                        DeathKey {
                            tier,
                            has_place,
                            phrasing,
                            with_age,
                        }
                        .into(),
                    );
                }
            }
            keys.push(
                DeathKey {
                    tier: DateTier::Absent,
                    has_place: true,
                    phrasing,
                    with_age,
                }
                .into(),
            );
            // The bare "died" sentence only has verbose forms.
            if matches!(phrasing, Phrasing::Verbose { .. }) {
                keys.push(
                    DeathKey {
                        tier: DateTier::Absent,
                        has_place: false,
                        phrasing,
                        with_age,
                    }
                    .into(),
                );
            }
        }
    }

    // Rites render even from a bare event, so every combination exists.
    for rite in [Rite::Burial, Rite::Baptism, Rite::Christening] {
        for phrasing in all_phrasings() {
            for tier in ALL_TIERS {
                for has_place in [true, false] {
                    keys.push(
                        RiteKey {
                            rite,
                            tier,
                            has_place,
                            phrasing,
                        }
                        .into(),
                    );
                }
            }
        }
    }

    for parents in [ParentSet::Both, ParentSet::FatherOnly, ParentSet::MotherOnly] {
        for gender in GENDERS {
            for form in [
                ParentageForm::Verbose {
                    form: NameForm::Name,
                    tense: Tense::Present,
                },
                ParentageForm::Verbose {
                    form: NameForm::Name,
                    tense: Tense::Past,
                },
                ParentageForm::Verbose {
                    form: NameForm::Pronoun,
                    tense: Tense::Present,
                },
                ParentageForm::Verbose {
                    form: NameForm::Pronoun,
                    tense: Tense::Past,
                },
                ParentageForm::Succinct,
            ] {
                keys.push(
                    ParentageKey {
                        parents,
                        gender,
                        form,
                    }
                    .into(),
                );
            }
        }
    }

    let union_details = [
        UnionDetail::DatePlace(DateTier::Partial),
        UnionDetail::DatePlace(DateTier::Full),
        UnionDetail::DatePlace(DateTier::Modified),
        UnionDetail::DateOnly(DateTier::Partial),
        UnionDetail::DateOnly(DateTier::Full),
        UnionDetail::DateOnly(DateTier::Modified),
        UnionDetail::PlaceOnly,
        UnionDetail::Neither,
    ];
    let union_phrasings = [
        UnionPhrasing::Verbose {
            gender: Gender::Male,
        },
        UnionPhrasing::Verbose {
            gender: Gender::Female,
        },
        UnionPhrasing::Verbose {
            gender: Gender::Unknown,
        },
        UnionPhrasing::Succinct,
    ];
    for kind in [
        UnionKind::Married,
        UnionKind::Partnership,
        UnionKind::Relationship,
    ] {
        for order in [UnionOrder::First, UnionOrder::Also] {
            for detail in union_details {
                for phrasing in union_phrasings {
                    keys.push(
                        UnionKey {
                            kind,
                            order,
                            detail,
                            phrasing,
                        }
                        .into(),
                    );
                }
            }
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_bucketing_covers_all_kinds() {
        assert_eq!(
            UnionKind::from_relation(RelationKind::Married),
            UnionKind::Married
        );
        assert_eq!(
            UnionKind::from_relation(RelationKind::Unmarried),
            UnionKind::Partnership
        );
        assert_eq!(
            UnionKind::from_relation(RelationKind::CivilUnion),
            UnionKind::Relationship
        );
        assert_eq!(
            UnionKind::from_relation(RelationKind::Unknown),
            UnionKind::Relationship
        );
        assert_eq!(
            UnionKind::from_relation(RelationKind::Custom),
            UnionKind::Relationship
        );
    }

    #[test]
    fn ids_are_stable_and_dotted() {
        let birth: TemplateKey = BirthKey {
            tier: DateTier::Full,
            has_place: true,
            phrasing: Phrasing::Verbose {
                gender: Gender::Male,
                form: NameForm::Name,
            },
        }
        .into();
        assert_eq!(birth.id(), "birth.full.place.verbose.male.name");

        let death: TemplateKey = DeathKey {
            tier: DateTier::Absent,
            has_place: false,
            phrasing: Phrasing::Verbose {
                gender: Gender::Female,
                form: NameForm::Pronoun,
            },
            with_age: true,
        }
        .into();
        assert_eq!(death.id(), "death.absent.no_place.verbose.female.pronoun.age");

        let union: TemplateKey = UnionKey {
            kind: UnionKind::Married,
            order: UnionOrder::Also,
            detail: UnionDetail::DatePlace(DateTier::Modified),
            phrasing: UnionPhrasing::Succinct,
        }
        .into();
        assert_eq!(union.id(), "union.married.also.date_place.modified.succinct");

        let parentage: TemplateKey = ParentageKey {
            parents: ParentSet::MotherOnly,
            gender: Gender::Unknown,
            form: ParentageForm::Succinct,
        }
        .into();
        assert_eq!(parentage.id(), "parentage.mother.unknown.succinct");
    }

    #[test]
    fn reachable_key_space_has_expected_size() {
        let keys = all_reachable();
        let births = keys
            .iter()
            .filter(|k| matches!(k, TemplateKey::Birth(_)))
            .count();
        let deaths = keys
            .iter()
            .filter(|k| matches!(k, TemplateKey::Death(_)))
            .count();
        let rites = keys
            .iter()
            .filter(|k| matches!(k, TemplateKey::Rite(_)))
            .count();
        let parentage = keys
            .iter()
            .filter(|k| matches!(k, TemplateKey::Parentage(_)))
            .count();
        let unions = keys
            .iter()
            .filter(|k| matches!(k, TemplateKey::Union(_)))
            .count();

        assert_eq!(births, 49);
        assert_eq!(deaths, 110);
        assert_eq!(rites, 168);
        assert_eq!(parentage, 45);
        assert_eq!(unions, 192);
        assert_eq!(keys.len(), 564);
    }

    #[test]
    fn reachable_ids_are_unique() {
        let keys = all_reachable();
        let mut ids: Vec<String> = keys.iter().map(|k| k.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), keys.len());
    }

    #[test]
    fn other_gender_shares_unknown_id_segment() {
        let key: TemplateKey = ParentageKey {
            parents: ParentSet::Both,
            gender: Gender::Other,
            form: ParentageForm::Succinct,
        }
        .into();
        assert_eq!(key.id(), "parentage.both.unknown.succinct");
    }
}
