//! Per-subject narration state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::NameForm;

/// Mutable state for narrating one subject.
///
/// The session owns the name-versus-pronoun decision: the first rendered
/// sentence references the subject by name and everything after by
/// pronoun. The flag only moves forward, so a sentence family that happens
/// to render nothing never resets later sentences to the name form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationSession {
    /// Unique id correlating this narration's trace output.
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    /// Handle of the subject in the tree store.
    pub subject: String,
    /// Name bound into name-form templates.
    pub first_name: String,
    name_used: bool,
    /// Drives tense selection for parentage sentences.
    pub alive: bool,
    pub sentences_rendered: usize,
}

impl NarrationSession {
    pub fn new(subject: impl Into<String>, first_name: impl Into<String>, alive: bool) -> Self {
        let first_name = first_name.into();
        Self {
            session_id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            subject: subject.into(),
            // With no name to print, start straight at the pronoun form.
            name_used: first_name.is_empty(),
            first_name,
            alive,
            sentences_rendered: 0,
        }
    }

    /// Name form the next sentence should select with.
    pub fn name_form(&self) -> NameForm {
        if self.name_used {
            NameForm::Pronoun
        } else {
            NameForm::Name
        }
    }

    pub fn name_used(&self) -> bool {
        self.name_used
    }

    pub(crate) fn mark_sentence_rendered(&mut self) {
        self.name_used = true;
        self.sentences_rendered += 1;
    }
}
