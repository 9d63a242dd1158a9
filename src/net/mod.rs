//! REST client and wire types for the access-management API.

pub mod api;
pub mod types;
