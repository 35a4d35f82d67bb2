//! In-memory implementation of the string repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{AnalyzedString, NewAnalyzedString};
use crate::domain::repositories::StringRepository;
use crate::error::AppError;

/// A string repository held in process memory.
///
/// Used by the integration tests and as the runtime backend when no
/// `DATABASE_URL` is configured. The duplicate check and the append happen
/// under one write lock, giving the same single-writer guarantees as the
/// database-backed implementation. Data does not survive a restart.
pub struct MemoryStringRepository {
    records: RwLock<Vec<AnalyzedString>>,
    next_id: AtomicI64,
}

impl MemoryStringRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStringRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StringRepository for MemoryStringRepository {
    async fn insert(&self, new: NewAnalyzedString) -> Result<AnalyzedString, AppError> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.value == new.value) {
            return Err(AppError::conflict(
                "Value already stored",
                json!({ "value": new.value }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = AnalyzedString::new(id, new, Utc::now());
        records.push(record.clone());

        Ok(record)
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedString>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.value == value).cloned())
    }

    async fn list_all(&self) -> Result<Vec<AnalyzedString>, AppError> {
        let records = self.records.read().await;
        Ok(records.clone())
    }

    async fn delete_by_value(&self, value: &str) -> Result<bool, AppError> {
        let mut records = self.records.write().await;

        match records.iter().position(|r| r.value == value) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analyzer::analyze;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryStringRepository::new();

        let stored = repo.insert(analyze("hello")).await.unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.value, "hello");

        let found = repo.find_by_value("hello").await.unwrap();
        assert_eq!(found.unwrap().id, stored.id);
    }

    #[tokio::test]
    async fn test_find_absent_value() {
        let repo = MemoryStringRepository::new();
        assert!(repo.find_by_value("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_conflict() {
        let repo = MemoryStringRepository::new();
        repo.insert(analyze("once")).await.unwrap();

        let err = repo.insert(analyze("once")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_list_all_preserves_insertion_order() {
        let repo = MemoryStringRepository::new();
        repo.insert(analyze("first")).await.unwrap();
        repo.insert(analyze("second")).await.unwrap();
        repo.insert(analyze("third")).await.unwrap();

        let values: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(values, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_delete_by_value() {
        let repo = MemoryStringRepository::new();
        repo.insert(analyze("gone soon")).await.unwrap();

        assert!(repo.delete_by_value("gone soon").await.unwrap());
        assert!(repo.find_by_value("gone soon").await.unwrap().is_none());
        assert!(!repo.delete_by_value("gone soon").await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = MemoryStringRepository::new();
        repo.insert(analyze("a")).await.unwrap();
        repo.delete_by_value("a").await.unwrap();

        let second = repo.insert(analyze("b")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_deleted_value_can_be_inserted_again() {
        let repo = MemoryStringRepository::new();
        repo.insert(analyze("phoenix")).await.unwrap();
        repo.delete_by_value("phoenix").await.unwrap();

        assert!(repo.insert(analyze("phoenix")).await.is_ok());
    }
}
