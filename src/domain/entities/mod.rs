//! Core domain entities representing the business data model.
//!
//! Entities are plain immutable data structures without business logic.
//! The creation input follows the "New Type" pattern: [`NewAnalyzedString`]
//! carries the analyzer output to be persisted, [`AnalyzedString`] is the
//! stored record with storage-assigned fields.

pub mod analyzed_string;

pub use analyzed_string::{AnalyzedString, NewAnalyzedString};
