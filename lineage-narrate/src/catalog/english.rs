//! Built-in English templates.
//!
//! Placeholders are lowercase names in braces, `{name}` or `{birth_date}`,
//! substituted verbatim at render time. The birth and death families are
//! written out in full below; the rite, parentage, and partner families
//! vary only in a verb or a parent phrase, so their text is assembled from
//! the shared sentence skeletons at the bottom of this module.

use lineage_core::models::Gender;

use crate::classify::DateTier;

use super::keys::{
    BirthKey, DeathKey, NameForm, ParentSet, ParentageForm, ParentageKey, Phrasing, RiteKey,
    TemplateKey, Tense, UnionDetail, UnionKey, UnionKind, UnionOrder, UnionPhrasing,
};

/// Default template text for a key, `None` where no sentence exists.
pub(crate) fn default_template(key: &TemplateKey) -> Option<String> {
    match key {
        TemplateKey::Birth(key) => birth_template(key).map(str::to_string),
        TemplateKey::Death(key) => death_template(key).map(str::to_string),
        TemplateKey::Rite(key) => Some(rite_template(key)),
        TemplateKey::Parentage(key) => Some(parentage_template(key)),
        TemplateKey::Union(key) => Some(union_template(key)),
    }
}

/// Sentence subject, collapsed from phrasing. Named subjects read the same
/// for every gender because the subject name is bound to `{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    Name,
    He,
    She,
    ThisPerson,
    Succinct,
}

fn subject(phrasing: &Phrasing) -> Subject {
    match phrasing {
        Phrasing::Succinct => Subject::Succinct,
        Phrasing::Verbose {
            form: NameForm::Name,
            ..
        } => Subject::Name,
        Phrasing::Verbose { gender, .. } => match gender.normalized() {
            Gender::Male => Subject::He,
            Gender::Female => Subject::She,
            _ => Subject::ThisPerson,
        },
    }
}

fn birth_template(key: &BirthKey) -> Option<&'static str> {
    let subj = subject(&key.phrasing);
    let template = match (key.tier, key.has_place) {
        (DateTier::Full, true) => match subj {
            Subject::Name => "{name} was born on {birth_date} in {birth_place}.",
            Subject::He => "He was born on {birth_date} in {birth_place}.",
            Subject::She => "She was born on {birth_date} in {birth_place}.",
            Subject::ThisPerson => "This person was born on {birth_date} in {birth_place}.",
            Subject::Succinct => "Born {birth_date} in {birth_place}.",
        },
        (DateTier::Full, false) => match subj {
            Subject::Name => "{name} was born on {birth_date}.",
            Subject::He => "He was born on {birth_date}.",
            Subject::She => "She was born on {birth_date}.",
            Subject::ThisPerson => "This person was born on {birth_date}.",
            Subject::Succinct => "Born {birth_date}.",
        },
        (DateTier::Modified, true) => match subj {
            Subject::Name => "{name} was born {modified_date} in {birth_place}.",
            Subject::He => "He was born {modified_date} in {birth_place}.",
            Subject::She => "She was born {modified_date} in {birth_place}.",
            Subject::ThisPerson => "This person was born {modified_date} in {birth_place}.",
            Subject::Succinct => "Born {modified_date} in {birth_place}.",
        },
        (DateTier::Modified, false) => match subj {
            Subject::Name => "{name} was born {modified_date}.",
            Subject::He => "He was born {modified_date}.",
            Subject::She => "She was born {modified_date}.",
            Subject::ThisPerson => "This person was born {modified_date}.",
            Subject::Succinct => "Born {modified_date}.",
        },
        (DateTier::Partial, true) => match subj {
            Subject::Name => "{name} was born in {month_year} in {birth_place}.",
            Subject::He => "He was born in {month_year} in {birth_place}.",
            Subject::She => "She was born in {month_year} in {birth_place}.",
            Subject::ThisPerson => "This person was born in {month_year} in {birth_place}.",
            Subject::Succinct => "Born {month_year} in {birth_place}.",
        },
        (DateTier::Partial, false) => match subj {
            Subject::Name => "{name} was born in {month_year}.",
            Subject::He => "He was born in {month_year}.",
            Subject::She => "She was born in {month_year}.",
            Subject::ThisPerson => "This person was born in {month_year}.",
            Subject::Succinct => "Born {month_year}.",
        },
        (DateTier::Absent, true) => match subj {
            Subject::Name => "{name} was born in {birth_place}.",
            Subject::He => "He was born in {birth_place}.",
            Subject::She => "She was born in {birth_place}.",
            Subject::ThisPerson => "This person was born in {birth_place}.",
            Subject::Succinct => "Born in {birth_place}.",
        },
        // Nothing to say about a birth with neither date nor place.
        (DateTier::Absent, false) => return None,
    };
    Some(template)
}

fn death_template(key: &DeathKey) -> Option<&'static str> {
    let subj = subject(&key.phrasing);
    let template = match (key.tier, key.has_place) {
        (DateTier::Full, true) => match (subj, key.with_age) {
            (Subject::Name, false) => "{name} died on {death_date} in {death_place}.",
            (Subject::Name, true) => {
                "{name} died on {death_date} in {death_place} at the age of {age}."
            }
            (Subject::He, false) => "He died on {death_date} in {death_place}.",
            (Subject::He, true) => "He died on {death_date} in {death_place} at the age of {age}.",
            (Subject::She, false) => "She died on {death_date} in {death_place}.",
            (Subject::She, true) => {
                "She died on {death_date} in {death_place} at the age of {age}."
            }
            (Subject::ThisPerson, false) => "This person died on {death_date} in {death_place}.",
            (Subject::ThisPerson, true) => {
                "This person died on {death_date} in {death_place} at the age of {age}."
            }
            (Subject::Succinct, false) => "Died {death_date} in {death_place}.",
            (Subject::Succinct, true) => "Died {death_date} in {death_place} ({age}).",
        },
        (DateTier::Full, false) => match (subj, key.with_age) {
            (Subject::Name, false) => "{name} died on {death_date}.",
            (Subject::Name, true) => "{name} died on {death_date} at the age of {age}.",
            (Subject::He, false) => "He died on {death_date}.",
            (Subject::He, true) => "He died on {death_date} at the age of {age}.",
            (Subject::She, false) => "She died on {death_date}.",
            (Subject::She, true) => "She died on {death_date} at the age of {age}.",
            (Subject::ThisPerson, false) => "This person died on {death_date}.",
            (Subject::ThisPerson, true) => "This person died on {death_date} at the age of {age}.",
            (Subject::Succinct, false) => "Died {death_date}.",
            (Subject::Succinct, true) => "Died {death_date} ({age}).",
        },
        (DateTier::Modified, true) => match (subj, key.with_age) {
            (Subject::Name, false) => "{name} died {modified_date} in {death_place}.",
            (Subject::Name, true) => {
                "{name} died {modified_date} in {death_place} at the age of {age}."
            }
            (Subject::He, false) => "He died {modified_date} in {death_place}.",
            (Subject::He, true) => "He died {modified_date} in {death_place} at the age of {age}.",
            (Subject::She, false) => "She died {modified_date} in {death_place}.",
            (Subject::She, true) => {
                "She died {modified_date} in {death_place} at the age of {age}."
            }
            (Subject::ThisPerson, false) => "This person died {modified_date} in {death_place}.",
            (Subject::ThisPerson, true) => {
                "This person died {modified_date} in {death_place} at the age of {age}."
            }
            (Subject::Succinct, false) => "Died {modified_date} in {death_place}.",
            (Subject::Succinct, true) => "Died {modified_date} in {death_place} ({age}).",
        },
        (DateTier::Modified, false) => match (subj, key.with_age) {
            (Subject::Name, false) => "{name} died {modified_date}.",
            (Subject::Name, true) => "{name} died {modified_date} at the age of {age}.",
            (Subject::He, false) => "He died {modified_date}.",
            (Subject::He, true) => "He died {modified_date} at the age of {age}.",
            (Subject::She, false) => "She died {modified_date}.",
            (Subject::She, true) => "She died {modified_date} at the age of {age}.",
            (Subject::ThisPerson, false) => "This person died {modified_date}.",
            (Subject::ThisPerson, true) => "This person died {modified_date} at the age of {age}.",
            (Subject::Succinct, false) => "Died {modified_date}.",
            (Subject::Succinct, true) => "Died {modified_date} ({age}).",
        },
        (DateTier::Partial, true) => match (subj, key.with_age) {
            (Subject::Name, false) => "{name} died in {month_year} in {death_place}.",
            (Subject::Name, true) => {
                "{name} died in {month_year} in {death_place} at the age of {age}."
            }
            (Subject::He, false) => "He died in {month_year} in {death_place}.",
            (Subject::He, true) => "He died in {month_year} in {death_place} at the age of {age}.",
            (Subject::She, false) => "She died in {month_year} in {death_place}.",
            (Subject::She, true) => {
                "She died in {month_year} in {death_place} at the age of {age}."
            }
            (Subject::ThisPerson, false) => "This person died in {month_year} in {death_place}.",
            (Subject::ThisPerson, true) => {
                "This person died in {month_year} in {death_place} at the age of {age}."
            }
            (Subject::Succinct, false) => "Died {month_year} in {death_place}.",
            (Subject::Succinct, true) => "Died {month_year} in {death_place} ({age}).",
        },
        (DateTier::Partial, false) => match (subj, key.with_age) {
            (Subject::Name, false) => "{name} died in {month_year}.",
            (Subject::Name, true) => "{name} died in {month_year} at the age of {age}.",
            (Subject::He, false) => "He died in {month_year}.",
            (Subject::He, true) => "He died in {month_year} at the age of {age}.",
            (Subject::She, false) => "She died in {month_year}.",
            (Subject::She, true) => "She died in {month_year} at the age of {age}.",
            (Subject::ThisPerson, false) => "This person died in {month_year}.",
            (Subject::ThisPerson, true) => "This person died in {month_year} at the age of {age}.",
            (Subject::Succinct, false) => "Died {month_year}.",
            (Subject::Succinct, true) => "Died {month_year} ({age}).",
        },
        (DateTier::Absent, true) => match (subj, key.with_age) {
            (Subject::Name, false) => "{name} died in {death_place}.",
            (Subject::Name, true) => "{name} died in {death_place} at the age of {age}.",
            (Subject::He, false) => "He died in {death_place}.",
            (Subject::He, true) => "He died in {death_place} at the age of {age}.",
            (Subject::She, false) => "She died in {death_place}.",
            (Subject::She, true) => "She died in {death_place} at the age of {age}.",
            (Subject::ThisPerson, false) => "This person died in {death_place}.",
            (Subject::ThisPerson, true) => "This person died in {death_place} at the age of {age}.",
            (Subject::Succinct, false) => "Died in {death_place}.",
            (Subject::Succinct, true) => "Died in {death_place} ({age}).",
        },
        (DateTier::Absent, false) => match (subj, key.with_age) {
            (Subject::Name, false) => "{name} died.",
            (Subject::Name, true) => "{name} died at the age of {age}.",
            (Subject::He, false) => "He died.",
            (Subject::He, true) => "He died at the age of {age}.",
            (Subject::She, false) => "She died.",
            (Subject::She, true) => "She died at the age of {age}.",
            (Subject::ThisPerson, false) => "This person died.",
            (Subject::ThisPerson, true) => "This person died at the age of {age}.",
            // No succinct fragment for a death with nothing recorded.
            (Subject::Succinct, _) => return None,
        },
    };
    Some(template)
}

fn rite_template(key: &RiteKey) -> String {
    let date_token = braced(key.rite.date_placeholder());
    let place_part = if key.has_place {
        format!(" in {}", braced(key.rite.place_placeholder()))
    } else {
        String::new()
    };
    match subject(&key.phrasing) {
        Subject::Succinct => {
            let date_part = match key.tier {
                DateTier::Full => format!(" {date_token}"),
                DateTier::Partial => " {month_year}".to_string(),
                DateTier::Modified => " {modified_date}".to_string(),
                DateTier::Absent => String::new(),
            };
            format!(
                "{}{date_part}{place_part}{{endnotes}}.",
                title_case(key.rite.verb())
            )
        }
        subj => {
            let head = match subj {
                Subject::He => "He",
                Subject::She => "She",
                Subject::ThisPerson | Subject::Succinct => "This person",
                Subject::Name => "{name}",
            };
            let date_part = match key.tier {
                DateTier::Full => format!(" on {date_token}"),
                DateTier::Partial => " in {month_year}".to_string(),
                DateTier::Modified => " {modified_date}".to_string(),
                DateTier::Absent => String::new(),
            };
            format!(
                "{head} was {}{date_part}{place_part}{{endnotes}}.",
                key.rite.verb()
            )
        }
    }
}

fn parentage_template(key: &ParentageKey) -> String {
    let relation = match key.gender.normalized() {
        Gender::Male => "son",
        Gender::Female => "daughter",
        _ => "child",
    };
    let parents = match key.parents {
        ParentSet::Both => "{father} and {mother}",
        ParentSet::FatherOnly => "{father}",
        ParentSet::MotherOnly => "{mother}",
    };
    match &key.form {
        ParentageForm::Succinct => format!("{} of {parents}.", title_case(relation)),
        ParentageForm::Verbose { form, tense } => {
            let verb = match tense {
                Tense::Present => "is",
                Tense::Past => "was",
            };
            let head = match (form, key.gender.normalized()) {
                (NameForm::Name, _) => "{name}",
                (NameForm::Pronoun, Gender::Male) => "He",
                (NameForm::Pronoun, Gender::Female) => "She",
                (NameForm::Pronoun, _) => "This person",
            };
            format!("{head} {verb} the {relation} of {parents}.")
        }
    }
}

fn union_template(key: &UnionKey) -> String {
    format!("{}{}", union_head(key), union_tail(&key.detail))
}

fn union_head(key: &UnionKey) -> &'static str {
    let subject = match &key.phrasing {
        UnionPhrasing::Verbose { gender } => Some(gender.normalized()),
        UnionPhrasing::Succinct => None,
    };
    match (key.kind, key.order) {
        (UnionKind::Married, UnionOrder::First) => match subject {
            Some(Gender::Male) => "He married {spouse}",
            Some(Gender::Female) => "She married {spouse}",
            Some(_) => "This person married {spouse}",
            None => "Married {spouse}",
        },
        (UnionKind::Married, UnionOrder::Also) => match subject {
            Some(Gender::Male) => "He also married {spouse}",
            Some(Gender::Female) => "She also married {spouse}",
            Some(_) => "This person also married {spouse}",
            None => "Also married {spouse}",
        },
        (UnionKind::Partnership, UnionOrder::First) => match subject {
            Some(Gender::Male) => "He had an unmarried relationship with {spouse}",
            Some(Gender::Female) => "She had an unmarried relationship with {spouse}",
            Some(_) => "This person had an unmarried relationship with {spouse}",
            None => "Unmarried relationship with {spouse}",
        },
        (UnionKind::Partnership, UnionOrder::Also) => match subject {
            Some(Gender::Male) => "He also had an unmarried relationship with {spouse}",
            Some(Gender::Female) => "She also had an unmarried relationship with {spouse}",
            Some(_) => "This person also had an unmarried relationship with {spouse}",
            None => "Also unmarried relationship with {spouse}",
        },
        (UnionKind::Relationship, UnionOrder::First) => match subject {
            Some(Gender::Male) => "He had a relationship with {spouse}",
            Some(Gender::Female) => "She had a relationship with {spouse}",
            Some(_) => "This person had a relationship with {spouse}",
            None => "Relationship with {spouse}",
        },
        (UnionKind::Relationship, UnionOrder::Also) => match subject {
            Some(Gender::Male) => "He also had a relationship with {spouse}",
            Some(Gender::Female) => "She also had a relationship with {spouse}",
            Some(_) => "This person also had a relationship with {spouse}",
            None => "Also relationship with {spouse}",
        },
    }
}

fn union_tail(detail: &UnionDetail) -> &'static str {
    match detail {
        UnionDetail::DatePlace(DateTier::Full) => " on {full_date} in {place}{endnotes}.",
        UnionDetail::DatePlace(DateTier::Partial) => " in {partial_date} in {place}{endnotes}.",
        UnionDetail::DatePlace(_) => " {modified_date} in {place}{endnotes}.",
        UnionDetail::DateOnly(DateTier::Full) => " on {full_date}{endnotes}.",
        UnionDetail::DateOnly(DateTier::Partial) => " in {partial_date}{endnotes}.",
        UnionDetail::DateOnly(_) => " {modified_date}{endnotes}.",
        UnionDetail::PlaceOnly => " in {place}{endnotes}.",
        UnionDetail::Neither => "{endnotes}.",
    }
}

fn braced(name: &str) -> String {
    format!("{{{name}}}")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::keys::Rite;

    #[test]
    fn birth_full_date_first_mention_uses_name() {
        let key = BirthKey {
            tier: DateTier::Full,
            has_place: true,
            phrasing: Phrasing::Verbose {
                gender: Gender::Female,
                form: NameForm::Name,
            },
        };
        assert_eq!(
            birth_template(&key).unwrap(),
            "{name} was born on {birth_date} in {birth_place}."
        );
    }

    #[test]
    fn birth_without_anything_has_no_template() {
        let key = BirthKey {
            tier: DateTier::Absent,
            has_place: false,
            phrasing: Phrasing::Succinct,
        };
        assert!(birth_template(&key).is_none());
    }

    #[test]
    fn succinct_death_parenthesizes_age() {
        let key = DeathKey {
            tier: DateTier::Full,
            has_place: true,
            phrasing: Phrasing::Succinct,
            with_age: true,
        };
        assert_eq!(
            death_template(&key).unwrap(),
            "Died {death_date} in {death_place} ({age})."
        );
    }

    #[test]
    fn bare_death_keeps_verbose_forms_only() {
        let verbose = DeathKey {
            tier: DateTier::Absent,
            has_place: false,
            phrasing: Phrasing::Verbose {
                gender: Gender::Unknown,
                form: NameForm::Pronoun,
            },
            with_age: false,
        };
        assert_eq!(death_template(&verbose).unwrap(), "This person died.");

        let succinct = DeathKey {
            phrasing: Phrasing::Succinct,
            ..verbose
        };
        assert!(death_template(&succinct).is_none());
    }

    #[test]
    fn other_gender_reads_as_this_person() {
        let key = BirthKey {
            tier: DateTier::Partial,
            has_place: false,
            phrasing: Phrasing::Verbose {
                gender: Gender::Other,
                form: NameForm::Pronoun,
            },
        };
        assert_eq!(
            birth_template(&key).unwrap(),
            "This person was born in {month_year}."
        );
    }

    #[test]
    fn rite_templates_carry_their_own_placeholders() {
        let key = RiteKey {
            rite: Rite::Baptism,
            tier: DateTier::Full,
            has_place: true,
            phrasing: Phrasing::Verbose {
                gender: Gender::Male,
                form: NameForm::Pronoun,
            },
        };
        assert_eq!(
            rite_template(&key),
            "He was baptised on {baptism_date} in {baptism_place}{endnotes}."
        );
    }

    #[test]
    fn bare_rite_still_renders_a_sentence() {
        let verbose = RiteKey {
            rite: Rite::Burial,
            tier: DateTier::Absent,
            has_place: false,
            phrasing: Phrasing::Verbose {
                gender: Gender::Female,
                form: NameForm::Name,
            },
        };
        assert_eq!(rite_template(&verbose), "{name} was buried{endnotes}.");

        let succinct = RiteKey {
            phrasing: Phrasing::Succinct,
            ..verbose
        };
        assert_eq!(rite_template(&succinct), "Buried{endnotes}.");
    }

    #[test]
    fn parentage_inflects_relation_and_tense() {
        let key = ParentageKey {
            parents: ParentSet::Both,
            gender: Gender::Male,
            form: ParentageForm::Verbose {
                form: NameForm::Name,
                tense: Tense::Past,
            },
        };
        assert_eq!(
            parentage_template(&key),
            "{name} was the son of {father} and {mother}."
        );

        let succinct = ParentageKey {
            parents: ParentSet::MotherOnly,
            gender: Gender::Unknown,
            form: ParentageForm::Succinct,
        };
        assert_eq!(parentage_template(&succinct), "Child of {mother}.");
    }

    #[test]
    fn union_text_joins_head_and_tail() {
        let key = UnionKey {
            kind: UnionKind::Married,
            order: UnionOrder::Also,
            detail: UnionDetail::DatePlace(DateTier::Modified),
            phrasing: UnionPhrasing::Verbose {
                gender: Gender::Female,
            },
        };
        assert_eq!(
            union_template(&key),
            "She also married {spouse} {modified_date} in {place}{endnotes}."
        );

        let succinct = UnionKey {
            kind: UnionKind::Partnership,
            order: UnionOrder::First,
            detail: UnionDetail::Neither,
            phrasing: UnionPhrasing::Succinct,
        };
        assert_eq!(
            union_template(&succinct),
            "Unmarried relationship with {spouse}{endnotes}."
        );
    }
}
