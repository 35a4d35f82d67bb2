//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract implemented by
//! `crate::infrastructure::persistence`; mock implementations are
//! auto-generated via `mockall` for service tests.

pub mod string_repository;

pub use string_repository::StringRepository;

#[cfg(test)]
pub use string_repository::MockStringRepository;
