//! Request and response types for the HTTP API.

pub mod health;
pub mod strings;
