//! DTOs for string analysis endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::collections::HashMap;
use validator::Validate;

use crate::domain::entities::AnalyzedString;
use crate::domain::query::StringFilter;

/// Request to analyze and store a string.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStringRequest {
    /// The raw text to analyze. Leading and trailing whitespace is trimmed
    /// before analysis; the trimmed value becomes the record's identity.
    #[validate(length(min = 1, message = "Value must not be empty"))]
    pub value: String,
}

/// JSON representation of a stored analysis record.
#[derive(Debug, Serialize)]
pub struct StringRecordResponse {
    pub id: i64,
    pub value: String,
    pub length: i64,
    pub is_palindrome: bool,
    pub unique_characters: i64,
    pub word_count: i64,
    pub content_hash: String,
    pub character_frequency: HashMap<char, i64>,
    pub created_at: DateTime<Utc>,
}

impl From<AnalyzedString> for StringRecordResponse {
    fn from(record: AnalyzedString) -> Self {
        Self {
            id: record.id,
            value: record.value,
            length: record.length,
            is_palindrome: record.is_palindrome,
            unique_characters: record.unique_characters,
            word_count: record.word_count,
            content_hash: record.content_hash,
            character_frequency: record.character_frequency,
            created_at: record.created_at,
        }
    }
}

/// List of stored records, in insertion order.
#[derive(Debug, Serialize)]
pub struct StringListResponse {
    pub items: Vec<StringRecordResponse>,
}

impl StringListResponse {
    /// Converts a batch of records into the list response shape.
    pub fn from_records(records: Vec<AnalyzedString>) -> Self {
        Self {
            items: records.into_iter().map(Into::into).collect(),
        }
    }
}

/// Structured filter parameters for the list endpoint.
///
/// Uses `serde_with` to parse numbers and booleans from query strings; a
/// parameter that does not parse rejects the request rather than being
/// ignored.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListStringsParams {
    /// Inclusive lower bound on record length.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub min_length: Option<i64>,

    /// Inclusive upper bound on record length.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub max_length: Option<i64>,

    /// When present, keeps only records whose palindrome flag equals it.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub is_palindrome: Option<bool>,
}

impl ListStringsParams {
    /// Converts the parsed parameters into a domain filter.
    pub fn to_filter(&self) -> StringFilter {
        StringFilter::default()
            .with_length_bounds(self.min_length, self.max_length)
            .with_palindrome(self.is_palindrome)
    }
}

/// Query parameter for the natural-language filter endpoint.
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    /// Free-text query; absent means match everything.
    #[serde(default)]
    pub query: Option<String>,
}
