//! Network layer: wire types and HTTP calls to the answering service.

pub mod api;
pub mod types;
