//! Trait interfaces between the narration engine and its host.
//!
//! The engine never touches a database or a locale catalog directly. Hosts
//! implement these traits over whatever backing they have and hand the
//! engine borrowed trait objects.

mod alive;
mod display;
mod endnote;
mod locale;
mod store;

pub use alive::IAliveEstimator;
pub use display::{IDateDisplay, INameDisplay, IPlaceDisplay};
pub use endnote::IEndnoteLookup;
pub use locale::ILocale;
pub use store::ITreeStore;
