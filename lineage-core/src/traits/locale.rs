//! Translation and language identity.

/// Locale the narration is produced in.
///
/// `gettext` translates catalog strings; the identity implementation in
/// [`crate::display`] passes them through unchanged. `language` is the
/// ISO 639 code and drives language-specific post-processing, such as the
/// Hebrew prefix rules.
pub trait ILocale: Send + Sync {
    fn gettext(&self, text: &str) -> String;

    fn language(&self) -> &str;
}
