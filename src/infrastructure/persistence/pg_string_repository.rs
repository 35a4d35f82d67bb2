//! PostgreSQL implementation of the string repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{AnalyzedString, NewAnalyzedString};
use crate::domain::repositories::StringRepository;
use crate::error::AppError;

/// PostgreSQL repository for analyzed string storage and retrieval.
///
/// Uniqueness of `value` is enforced by the table's unique constraint, so
/// a concurrent duplicate insert surfaces as [`AppError::Conflict`] even
/// when it slips past the service-level pre-check.
pub struct PgStringRepository {
    pool: Arc<PgPool>,
}

impl PgStringRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: PgRow) -> Result<AnalyzedString, AppError> {
    let frequency_json: serde_json::Value = row.try_get("character_frequency")?;
    let character_frequency: HashMap<char, i64> = serde_json::from_value(frequency_json)
        .map_err(|e| {
            AppError::internal(
                "Stored character frequency is not a valid histogram",
                json!({ "reason": e.to_string() }),
            )
        })?;

    Ok(AnalyzedString {
        id: row.try_get("id")?,
        value: row.try_get("value")?,
        length: row.try_get("length")?,
        is_palindrome: row.try_get("is_palindrome")?,
        unique_characters: row.try_get("unique_characters")?,
        word_count: row.try_get("word_count")?,
        content_hash: row.try_get("content_hash")?,
        character_frequency,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl StringRepository for PgStringRepository {
    async fn insert(&self, new: NewAnalyzedString) -> Result<AnalyzedString, AppError> {
        let frequency_json = serde_json::to_value(&new.character_frequency).map_err(|e| {
            AppError::internal(
                "Failed to encode character frequency",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let row = sqlx::query(
            r#"
            INSERT INTO analyzed_strings
                (value, length, is_palindrome, unique_characters, word_count,
                 content_hash, character_frequency)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, value, length, is_palindrome, unique_characters,
                      word_count, content_hash, character_frequency, created_at
            "#,
        )
        .bind(&new.value)
        .bind(new.length)
        .bind(new.is_palindrome)
        .bind(new.unique_characters)
        .bind(new.word_count)
        .bind(&new.content_hash)
        .bind(frequency_json)
        .fetch_one(self.pool.as_ref())
        .await?;

        row_to_record(row)
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedString>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, value, length, is_palindrome, unique_characters,
                   word_count, content_hash, character_frequency, created_at
            FROM analyzed_strings
            WHERE value = $1
            "#,
        )
        .bind(value)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(row_to_record).transpose()
    }

    async fn list_all(&self) -> Result<Vec<AnalyzedString>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, value, length, is_palindrome, unique_characters,
                   word_count, content_hash, character_frequency, created_at
            FROM analyzed_strings
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn delete_by_value(&self, value: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM analyzed_strings WHERE value = $1")
            .bind(value)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
