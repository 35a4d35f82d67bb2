//! Repository trait for analyzed string data access.

use crate::domain::entities::{AnalyzedString, NewAnalyzedString};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and retrieving analyzed strings.
///
/// Records are keyed by their trimmed `value`; creation is atomic per
/// record and a duplicate value is rejected rather than merged.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStringRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStringRepository`] - in-memory map,
///   used by tests and as the fallback backend when no database is configured
///
/// # Examples
///
/// See integration tests: `tests/handler_strings.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StringRepository: Send + Sync {
    /// Persists a newly analyzed string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with the same value
    /// already exists.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new: NewAnalyzedString) -> Result<AnalyzedString, AppError>;

    /// Finds a record by its (trimmed) value.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(AnalyzedString))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedString>, AppError>;

    /// Lists every stored record in insertion order.
    ///
    /// Filtering is applied by the caller; the storage contract is the
    /// plain sequence of records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_all(&self) -> Result<Vec<AnalyzedString>, AppError>;

    /// Deletes a record by its value.
    ///
    /// Returns `Ok(true)` if the record was found and deleted, `Ok(false)`
    /// if no record matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_by_value(&self, value: &str) -> Result<bool, AppError>;
}
