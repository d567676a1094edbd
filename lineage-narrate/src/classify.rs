//! Date precision classification.
//!
//! Every dated fact is sorted into a precision tier before template
//! selection. The tier decides which template family phrases the date:
//! "on 4 March 1850", "in March 1850", or "about 1850".

use serde::{Deserialize, Serialize};

use lineage_core::models::Date;

/// Precision tier of a recorded date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTier {
    /// No usable date at all.
    Absent,
    /// A year, possibly with a month, but no day.
    Partial,
    /// Year, month, and day all recorded.
    Full,
    /// Carries a qualifier such as "about" or "before", at any precision.
    Modified,
}

/// Classify a date into its tier.
///
/// A qualifier always wins: "about 4 March 1850" narrates as a modified
/// date even though every component is recorded.
pub fn classify_date(date: &Date) -> DateTier {
    if date.is_qualified() {
        DateTier::Modified
    } else if date.day_valid() {
        DateTier::Full
    } else if date.year_valid() {
        DateTier::Partial
    } else {
        DateTier::Absent
    }
}

/// Tier to select templates with, once the displayed date string is known
/// to be non-empty.
///
/// Selection gates on rendered text. A date that classified as `Absent`
/// can still reach selection with text behind it, because hosts may seed
/// a placeholder string for missing dates; such text reads as a loose
/// date, so it takes the partial family.
pub fn presented_tier(tier: DateTier) -> DateTier {
    match tier {
        DateTier::Modified => DateTier::Modified,
        DateTier::Full => DateTier::Full,
        DateTier::Partial | DateTier::Absent => DateTier::Partial,
    }
}
