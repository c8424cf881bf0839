//! Adapters for the external auth and data collaborators.

pub mod api;
pub mod types;
