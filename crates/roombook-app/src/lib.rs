//! Command-line front end: one JSON request in, one JSON response out.

pub mod config;
pub mod error;
pub mod request;
