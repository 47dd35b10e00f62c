//! Wire-level data model shared by the recurrence and parameter crates.
//!
//! These mirror the JSON shapes exchanged with the booking UI and API:
//! camel-cased filter objects, `YYYY-MM-DD` dates and the positional
//! repetition triple.

mod filters;
mod recurrence;
mod repetition;
mod weekday;

pub use filters::{BookingFilters, DateRange, TimeSlot};
pub use recurrence::{Recurrence, RecurrenceInterval, RecurrenceType};
pub use repetition::{RepeatFrequency, RepetitionTriple};
pub use weekday::WeekdayCode;
