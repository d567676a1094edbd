//! Placeholder substitution and endnote splicing.

/// Every placeholder the built-in templates and value maps agree on.
///
/// Override templates are validated against this list, so a translation
/// table with a typo in a token fails fast instead of leaking braces into
/// narrated text. The three gendered name aliases all carry the subject's
/// name; they exist for override tables written against gendered template
/// sets.
pub const KNOWN_PLACEHOLDERS: [&str; 24] = [
    "name",
    "male_name",
    "female_name",
    "unknown_gender_name",
    "birth_date",
    "birth_place",
    "death_date",
    "death_place",
    "burial_date",
    "burial_place",
    "baptism_date",
    "baptism_place",
    "christening_date",
    "christening_place",
    "month_year",
    "modified_date",
    "full_date",
    "partial_date",
    "place",
    "spouse",
    "father",
    "mother",
    "age",
    "endnotes",
];

/// Values bound for one sentence render.
///
/// A plain ordered list rather than a map: a sentence binds at most a
/// dozen values and is rendered once.
#[derive(Debug, Clone, Default)]
pub struct ValueMap {
    entries: Vec<(&'static str, String)>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind one placeholder.
    pub fn bind(&mut self, key: &'static str, value: impl Into<String>) {
        self.entries.push((key, value.into()));
    }

    /// Bind the subject's name under `{name}` and the gendered aliases.
    pub fn bind_subject(&mut self, name: &str) {
        self.bind("name", name);
        self.bind("male_name", name);
        self.bind("female_name", name);
        self.bind("unknown_gender_name", name);
    }

    /// Substitute every bound placeholder into the template.
    pub fn substitute(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (key, value) in &self.entries {
            let token = format!("{{{key}}}");
            if out.contains(&token) {
                out = out.replace(&token, value);
            }
        }
        out
    }
}

/// Splice endnote markers into a finished sentence, directly after the
/// last word and before the final period.
///
/// An empty marker string leaves the sentence untouched.
pub fn append_endnote(text: &str, endnotes: &str) -> String {
    if endnotes.is_empty() {
        return text.to_string();
    }
    format!("{}{}.", text.trim_end_matches(['.', ' ']), endnotes)
}

/// First placeholder-shaped token not in [`KNOWN_PLACEHOLDERS`].
pub fn first_unknown_placeholder(template: &str) -> Option<String> {
    tokens(template)
        .into_iter()
        .find(|token| !KNOWN_PLACEHOLDERS.contains(&token.as_str()))
}

/// True when rendered text still contains placeholder-shaped tokens,
/// meaning a template referenced a value the sentence never bound.
pub fn has_unresolved(text: &str) -> bool {
    !tokens(text).is_empty()
}

/// Extract `{lower_snake}` tokens. Braced content with any other shape is
/// treated as literal text.
fn tokens(template: &str) -> Vec<String> {
    let mut out = Vec::new();
    let bytes = template.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'{' {
            if let Some(end) = template[i + 1..].find('}') {
                let token = &template[i + 1..i + 1 + end];
                if !token.is_empty()
                    && token.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
                {
                    out.push(token.to_string());
                    i = i + end + 2;
                    continue;
                }
            }
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_replaces_bound_and_keeps_unbound() {
        let mut values = ValueMap::new();
        values.bind("birth_date", "4 March 1850");
        let out = values.substitute("{name} was born on {birth_date}.");
        assert_eq!(out, "{name} was born on 4 March 1850.");
    }

    #[test]
    fn subject_binding_covers_gendered_aliases() {
        let mut values = ValueMap::new();
        values.bind_subject("Jan");
        assert_eq!(values.substitute("{name}"), "Jan");
        assert_eq!(values.substitute("{male_name}"), "Jan");
        assert_eq!(values.substitute("{female_name}"), "Jan");
        assert_eq!(values.substitute("{unknown_gender_name}"), "Jan");
    }

    #[test]
    fn endnotes_splice_before_final_period() {
        assert_eq!(
            append_endnote("He died on 2 January 1910.", "<sup>1</sup>"),
            "He died on 2 January 1910<sup>1</sup>."
        );
        assert_eq!(append_endnote("He died.", ""), "He died.");
        // Trailing whitespace before the period is folded away too.
        assert_eq!(append_endnote("He died. ", "<sup>2</sup>"), "He died<sup>2</sup>.");
    }

    #[test]
    fn unknown_placeholder_is_reported() {
        assert_eq!(
            first_unknown_placeholder("{name} was born {bith_date}."),
            Some("bith_date".to_string())
        );
        assert_eq!(first_unknown_placeholder("{name} was born."), None);
    }

    #[test]
    fn oddly_shaped_braces_are_literal() {
        assert!(!has_unresolved("set {X} to { } or {1850}"));
        assert!(has_unresolved("{name} was born"));
    }
}
