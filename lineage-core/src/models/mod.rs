//! Domain models consumed by the narration engine.

mod date;
mod event;
mod family;
mod gender;
mod note;
mod person;
mod place;

pub use date::{Date, DateQualifier};
pub use event::{Event, EventKind};
pub use family::{Family, RelationKind};
pub use gender::Gender;
pub use note::Note;
pub use person::{EventRef, EventRole, Name, Person};
pub use place::Place;
