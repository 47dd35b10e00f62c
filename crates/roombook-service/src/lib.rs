//! Query parameter serialization for the room-booking API.
//!
//! Filter state is mapped through declarative rule tables ([`params`]) into
//! the parameters actually sent to the server. [`serializers`] holds the
//! tables for room searches and booking requests.

pub mod error;
pub mod params;
pub mod serializers;
