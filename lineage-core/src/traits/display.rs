//! Formatting of dates, places, and names into display strings.

use crate::models::{Date, Person, Place};

/// Renders dates for running text.
pub trait IDateDisplay: Send + Sync {
    /// Full display of a date at whatever precision it carries.
    ///
    /// Must return an empty string for a date with no recorded components,
    /// qualified or not.
    fn display(&self, date: &Date) -> String;

    /// Year-level display, used when full dates are not wanted.
    fn display_year(&self, date: &Date) -> String;

    /// Human-readable span between two dates, largest unit only.
    ///
    /// `None` when either date lacks a year or the span is not positive.
    fn span_between(&self, start: &Date, end: &Date) -> Option<String>;
}

/// Renders places for running text.
pub trait IPlaceDisplay: Send + Sync {
    /// Display a place under the given format preference.
    fn display(&self, place: &Place, format: Option<i32>) -> String;
}

/// Renders person names for running text.
pub trait INameDisplay: Send + Sync {
    fn display(&self, person: &Person) -> String;
}
