//! REST API client layer: wire types and HTTP helpers.

pub mod api;
pub mod types;
