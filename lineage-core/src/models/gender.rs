//! Recorded gender and its presentation form.

use serde::{Deserialize, Serialize};

/// Gender as recorded on the person.
///
/// Narration only distinguishes male, female, and everything else, so
/// [`Gender::normalized`] folds `Other` into `Unknown` before template
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
    Other,
}

impl Gender {
    /// Collapse to the three presentation genders used by templates.
    pub fn normalized(&self) -> Gender {
        match self {
            Gender::Male => Gender::Male,
            Gender::Female => Gender::Female,
            Gender::Unknown | Gender::Other => Gender::Unknown,
        }
    }
}
