//! Calendar dates with partial precision.
//!
//! Genealogical records rarely carry a complete date. A component value of
//! zero means the record never supplied it, so a [`Date`] can hold anything
//! from nothing at all up to a full year-month-day triple, plus an optional
//! qualifier for approximate or inferred values.

use serde::{Deserialize, Serialize};

/// Qualifier attached to a recorded date.
///
/// Anything other than [`DateQualifier::None`] marks the date as modified:
/// approximate, bounded, or derived rather than read straight off a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateQualifier {
    #[default]
    None,
    About,
    Before,
    After,
    Estimated,
    Calculated,
}

impl DateQualifier {
    /// English prefix rendered ahead of the date text, empty for `None`.
    pub fn prefix(&self) -> &'static str {
        match self {
            DateQualifier::None => "",
            DateQualifier::About => "about ",
            DateQualifier::Before => "before ",
            DateQualifier::After => "after ",
            DateQualifier::Estimated => "estimated ",
            DateQualifier::Calculated => "calculated ",
        }
    }
}

/// A possibly-partial calendar date.
///
/// Components are stored as raw numbers with `0` meaning "not recorded".
/// Validity predicates build on each other: a day is only considered valid
/// when the month and year are too, so a stray day number on an otherwise
/// empty date does not promote it to full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Date {
    #[serde(default)]
    pub year: u16,
    #[serde(default)]
    pub month: u8,
    #[serde(default)]
    pub day: u8,
    #[serde(default)]
    pub qualifier: DateQualifier,
}

impl Date {
    /// Date with all components recorded and no qualifier.
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            qualifier: DateQualifier::None,
        }
    }

    /// Year-only date.
    pub fn year_only(year: u16) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    /// Attach a qualifier, consuming self.
    pub fn with_qualifier(mut self, qualifier: DateQualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    /// True when the year component was recorded.
    pub fn year_valid(&self) -> bool {
        self.year != 0
    }

    /// True when both the year and month components were recorded.
    pub fn month_valid(&self) -> bool {
        self.year_valid() && (1..=12).contains(&self.month)
    }

    /// True when the year, month, and day components were all recorded.
    pub fn day_valid(&self) -> bool {
        self.month_valid() && (1..=31).contains(&self.day)
    }

    /// True when no component was recorded at all.
    pub fn is_empty(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }

    /// True when the date carries a non-default qualifier.
    pub fn is_qualified(&self) -> bool {
        self.qualifier != DateQualifier::None
    }
}
