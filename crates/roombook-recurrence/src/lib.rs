//! Recurrence handling for room bookings.
//!
//! - [`sanitize`] normalizes the end date of a booking period against its recurrence
//! - [`descriptor`] maps between the API repetition triple and the form descriptor
//! - [`weekdays`] renders locale-correct weekday phrases
//! - [`expand`] enumerates occurrence dates and reconciles them with server buckets

pub mod descriptor;
pub mod error;
pub mod expand;
pub mod sanitize;
pub mod weekdays;
