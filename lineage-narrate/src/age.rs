//! Age at death.

use lineage_core::models::Person;
use lineage_core::traits::{IDateDisplay, ITreeStore};

/// Age at death, when one could be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeAtDeath {
    /// Display text such as "59 years", empty when unavailable.
    pub text: String,
    pub available: bool,
}

impl AgeAtDeath {
    pub fn unavailable() -> Self {
        Self {
            text: String::new(),
            available: false,
        }
    }

    /// Span between the subject's birth and death events.
    ///
    /// Both events must resolve and both dates must carry at least a year,
    /// and the span must be positive; anything less narrates without an
    /// age rather than with a wrong one.
    pub fn compute(store: &dyn ITreeStore, dates: &dyn IDateDisplay, person: &Person) -> Self {
        let birth = person.birth_ref.as_deref().and_then(|h| store.event(h));
        let death = person.death_ref.as_deref().and_then(|h| store.event(h));
        let (birth, death) = match (birth, death) {
            (Some(birth), Some(death)) => (birth, death),
            _ => return Self::unavailable(),
        };
        match dates.span_between(&birth.date, &death.date) {
            Some(text) if !text.is_empty() => Self {
                text,
                available: true,
            },
            _ => Self::unavailable(),
        }
    }
}
