//! Default values for configuration structs.

/// Narrations default to full sentences rather than compact fragments.
pub const DEFAULT_VERBOSE: bool = true;

/// The recorded first name is preferred over the call name.
pub const DEFAULT_USE_CALL_NAME: bool = false;

/// Dates render as bare years unless full dates are requested.
pub const DEFAULT_USE_FULL_DATE: bool = false;
