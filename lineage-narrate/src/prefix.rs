//! Hebrew prose adjustments for interpolated values.
//!
//! Hebrew templates glue particles straight onto the following word, which
//! changes the word itself: a leading vav must be doubled after a prefix,
//! a definite-article he is absorbed by it, and non-Hebrew text is set off
//! with a maqaf. Applied to date and place strings when narrating in
//! Hebrew, before substitution.

/// Adjust one rendered value for use after a Hebrew prefix particle.
pub fn hebrew_prefix(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() < 2 {
        return text.to_string();
    }
    if chars[0] == 'ו' && chars[1] != 'ו' {
        chars.insert(0, 'ו');
    } else if chars[0] == 'ה' {
        chars.remove(0);
    } else if !('א'..='ת').contains(&chars[0]) {
        chars.insert(0, '־');
    }
    chars.into_iter().collect()
}
