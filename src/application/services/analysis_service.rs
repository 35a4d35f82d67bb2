//! String analysis and retrieval service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::analyzer::analyze;
use crate::domain::entities::AnalyzedString;
use crate::domain::query::StringFilter;
use crate::domain::repositories::StringRepository;
use crate::error::AppError;

/// Service orchestrating analysis and storage of strings.
///
/// Runs the analyzer over raw input, enforces value uniqueness, and applies
/// filters to stored records. The storage backend is injected, so the same
/// service runs against PostgreSQL in production and the in-memory store in
/// tests.
pub struct AnalysisService {
    repository: Arc<dyn StringRepository>,
}

impl AnalysisService {
    /// Creates a new analysis service.
    pub fn new(repository: Arc<dyn StringRepository>) -> Self {
        Self { repository }
    }

    /// Analyzes a raw string and persists the resulting record.
    ///
    /// The value is trimmed before analysis; the trimmed value is the
    /// record's identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the trimmed value was already
    /// analyzed. Returns [`AppError::Internal`] on storage errors.
    pub async fn create_string(&self, raw_value: &str) -> Result<AnalyzedString, AppError> {
        let metrics = analyze(raw_value);

        if self
            .repository
            .find_by_value(&metrics.value)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "String already analyzed",
                json!({ "value": metrics.value }),
            ));
        }

        let record = self.repository.insert(metrics).await?;
        metrics::counter!("strings_created_total").increment(1);

        Ok(record)
    }

    /// Retrieves a stored record by its exact value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the value.
    pub async fn get_string(&self, value: &str) -> Result<AnalyzedString, AppError> {
        self.repository
            .find_by_value(value)
            .await?
            .ok_or_else(|| AppError::not_found("String not found", json!({ "value": value })))
    }

    /// Lists stored records matching the filter, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_strings(&self, filter: &StringFilter) -> Result<Vec<AnalyzedString>, AppError> {
        let records = self.repository.list_all().await?;

        Ok(records
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect())
    }

    /// Deletes a stored record by its exact value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the value.
    pub async fn delete_string(&self, value: &str) -> Result<(), AppError> {
        if self.repository.delete_by_value(value).await? {
            metrics::counter!("strings_deleted_total").increment(1);
            Ok(())
        } else {
            Err(AppError::not_found(
                "String not found",
                json!({ "value": value }),
            ))
        }
    }

    /// Reports whether the storage backend answers queries.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.find_by_value("").await.is_ok()
    }
}
