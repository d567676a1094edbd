//! Reference implementations of the display and locale traits.
//!
//! These cover English-language Gregorian output and are what the test
//! suite runs against. Hosts with their own date or name machinery swap in
//! their own implementations.

use crate::models::{Date, Event, Person, Place};
use crate::traits::{
    IAliveEstimator, IDateDisplay, IEndnoteLookup, ILocale, INameDisplay, IPlaceDisplay,
    ITreeStore,
};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English Gregorian date formatting: "4 March 1850", "March 1850", "1850".
///
/// Qualified dates keep their qualifier text in both full and year-only
/// display, so "about 1850" survives even when full dates are turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianDateDisplay;

impl GregorianDateDisplay {
    pub fn new() -> Self {
        Self
    }

    fn month_name(month: u8) -> &'static str {
        MONTHS[(month - 1) as usize]
    }
}

impl IDateDisplay for GregorianDateDisplay {
    fn display(&self, date: &Date) -> String {
        let body = if date.day_valid() {
            format!(
                "{} {} {}",
                date.day,
                Self::month_name(date.month),
                date.year
            )
        } else if date.month_valid() {
            format!("{} {}", Self::month_name(date.month), date.year)
        } else if date.year_valid() {
            date.year.to_string()
        } else {
            return String::new();
        };
        format!("{}{}", date.qualifier.prefix(), body)
    }

    fn display_year(&self, date: &Date) -> String {
        if date.year_valid() {
            format!("{}{}", date.qualifier.prefix(), date.year)
        } else {
            String::new()
        }
    }

    fn span_between(&self, start: &Date, end: &Date) -> Option<String> {
        if !start.year_valid() || !end.year_valid() {
            return None;
        }
        // Unrecorded month and day components count as the first of the
        // period, matching how spans are read off gravestone-style records.
        let mut years = i32::from(end.year) - i32::from(start.year);
        let mut months = i32::from(end.month.max(1)) - i32::from(start.month.max(1));
        let mut days = i32::from(end.day.max(1)) - i32::from(start.day.max(1));
        if days < 0 {
            days += 30;
            months -= 1;
        }
        if months < 0 {
            months += 12;
            years -= 1;
        }
        if years < 0 {
            return None;
        }
        if years > 0 {
            Some(spelled_unit(years, "year"))
        } else if months > 0 {
            Some(spelled_unit(months, "month"))
        } else if days > 0 {
            Some(spelled_unit(days, "day"))
        } else {
            None
        }
    }
}

fn spelled_unit(count: i32, singular: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Place display that prefers the short name when a non-zero format asks
/// for it, falling back to the full title.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitlePlaceDisplay;

impl TitlePlaceDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl IPlaceDisplay for TitlePlaceDisplay {
    fn display(&self, place: &Place, format: Option<i32>) -> String {
        match format {
            Some(f) if f != 0 && !place.name.is_empty() => place.name.clone(),
            _ => place.title.clone(),
        }
    }
}

/// "First Surname" name display with graceful fallback when a part is
/// missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNameDisplay;

impl StandardNameDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl INameDisplay for StandardNameDisplay {
    fn display(&self, person: &Person) -> String {
        let first = person.name.first.trim();
        let surname = person.name.surname.trim();
        match (first.is_empty(), surname.is_empty()) {
            (false, false) => format!("{first} {surname}"),
            (false, true) => first.to_string(),
            (true, false) => surname.to_string(),
            (true, true) => String::new(),
        }
    }
}

/// Pass-through locale: no translation, configurable language code.
#[derive(Debug, Clone)]
pub struct IdentityLocale {
    language: String,
}

impl IdentityLocale {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Default for IdentityLocale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl ILocale for IdentityLocale {
    fn gettext(&self, text: &str) -> String {
        text.to_string()
    }

    fn language(&self) -> &str {
        &self.language
    }
}

/// Considers a person dead exactly when their death reference resolves to
/// a stored event.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeathRecordEstimator;

impl DeathRecordEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl IAliveEstimator for DeathRecordEstimator {
    fn probably_alive(&self, person: &Person, store: &dyn ITreeStore) -> bool {
        person
            .death_ref
            .as_deref()
            .and_then(|handle| store.event(handle))
            .is_none()
    }
}

/// Endnote lookup that never produces markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEndnotes;

impl NoEndnotes {
    pub fn new() -> Self {
        Self
    }
}

impl IEndnoteLookup for NoEndnotes {
    fn endnote_numbers(&self, _event: &Event) -> String {
        String::new()
    }
}
