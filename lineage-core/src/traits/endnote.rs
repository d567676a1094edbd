//! Citation endnote markers.

use crate::models::Event;

/// Produces the endnote marker text for an event's citations.
///
/// The returned string is spliced into the sentence right before its final
/// period, so implementations typically render superscript-style numbers
/// like `"1"` or `"2a, 3"`. An empty string means no citations.
pub trait IEndnoteLookup: Send + Sync {
    fn endnote_numbers(&self, event: &Event) -> String;
}
