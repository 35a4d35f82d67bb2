//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles: entities, repository interfaces, and the two pure functions
//! the whole service is built around, independent of infrastructure
//! concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`analyzer`] - Derivation of every stored metric from a raw string
//! - [`query`] - Record filters and the natural-language interpreter
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - [`analyzer::analyze`] and [`query::interpret`] are total, side-effect-free
//!   functions; they can be called concurrently without coordination

pub mod analyzer;
pub mod entities;
pub mod query;
pub mod repositories;
