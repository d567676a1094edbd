/// Lineage system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fallback spouse label when no partner can be resolved.
/// Passed through the locale's translation before substitution.
pub const UNKNOWN_SPOUSE: &str = "Unknown";

/// Language code that triggers Hebrew prefix grammar on interpolated
/// date and place strings.
pub const HEBREW_LANGUAGE: &str = "he";
