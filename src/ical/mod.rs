//! iCalendar VEVENT handling: extraction from raw dumps, property parsing,
//! range matching and composing blocks for the bus.

pub mod compose;
pub mod event;
pub mod extract;
pub mod range;

pub use compose::{compose_vevent, EventDraft};
pub use event::Event;
pub use extract::BlockExtractor;
pub use range::{overlaps, RangeMatch};
