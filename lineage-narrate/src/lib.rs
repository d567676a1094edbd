//! # lineage-narrate
//!
//! Template-driven sentence narration for genealogical trees. Given a
//! subject's recorded facts, the narrator selects among pre-authored
//! templates keyed on what the records actually provide (date precision,
//! place presence, gender, phrasing style), substitutes the displayed
//! values, and splices citation endnotes.
//!
//! Hosts supply the tree store, display formatting, and locale through
//! the traits in `lineage-core`; translated template sets plug in as
//! catalog overrides without touching selection.

pub mod age;
pub mod catalog;
pub mod classify;
pub mod prefix;
pub mod render;
pub mod session;

mod facts;
mod narrator;

pub use catalog::{TemplateCatalog, TemplateKey, UnionOrder};
pub use classify::{classify_date, DateTier};
pub use narrator::Narrator;
pub use session::NarrationSession;
