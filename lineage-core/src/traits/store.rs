//! Read access to a genealogical tree.

use crate::models::{Event, Family, Note, Person, Place};

/// Resolves record handles into owned model values.
///
/// Lookups return `None` for dangling handles rather than erroring; the
/// narration layer treats an unresolvable record the same as an absent one.
pub trait ITreeStore: Send + Sync {
    fn person(&self, handle: &str) -> Option<Person>;

    fn event(&self, handle: &str) -> Option<Event>;

    fn place(&self, handle: &str) -> Option<Place>;

    fn note(&self, handle: &str) -> Option<Note>;

    fn family(&self, handle: &str) -> Option<Family>;
}
