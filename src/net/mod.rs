//! Backend API surface: wire types and the HTTP helpers that talk to the
//! rules-assistant service.

pub mod api;
pub mod types;
