//! Shared types, configuration and errors for the room-booking recurrence core.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
