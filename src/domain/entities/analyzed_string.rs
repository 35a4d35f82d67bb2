//! Analyzed string entity representing a stored value and its metrics.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A stored string together with the metrics derived from it.
///
/// The trimmed `value` is the unique identity of the record. Every metric
/// field is a pure function of `value`, computed once at creation by
/// [`crate::domain::analyzer::analyze`]; records are never updated.
#[derive(Debug, Clone)]
pub struct AnalyzedString {
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

impl AnalyzedString {
    /// Creates a stored record from its metrics and the storage-assigned
    /// `id` and `created_at`.
    pub fn new(id: i64, metrics: NewAnalyzedString, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            value: metrics.value,
            length: metrics.length,
            is_palindrome: metrics.is_palindrome,
            unique_characters: metrics.unique_characters,
            word_count: metrics.word_count,
            content_hash: metrics.content_hash,
            character_frequency: metrics.character_frequency,
            created_at,
        }
    }
}

/// Input data for persisting a newly analyzed string.
///
/// Carries the trimmed value (the identity) and the full set of derived
/// metrics; storage assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalyzedString {
    pub value: String,
    pub length: i64,
    pub is_palindrome: bool,
    pub unique_characters: i64,
    pub word_count: i64,
    pub content_hash: String,
    pub character_frequency: HashMap<char, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_metrics() -> NewAnalyzedString {
        NewAnalyzedString {
            value: "abc".to_string(),
            length: 3,
            is_palindrome: false,
            unique_characters: 3,
            word_count: 1,
            content_hash: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
                .to_string(),
            character_frequency: HashMap::from([('a', 1), ('b', 1), ('c', 1)]),
        }
    }

    #[test]
    fn test_analyzed_string_creation() {
        let now = Utc::now();
        let record = AnalyzedString::new(1, sample_metrics(), now);

        assert_eq!(record.id, 1);
        assert_eq!(record.value, "abc");
        assert_eq!(record.length, 3);
        assert!(!record.is_palindrome);
        assert_eq!(record.unique_characters, 3);
        assert_eq!(record.word_count, 1);
        assert_eq!(record.content_hash.len(), 64);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_frequency_counts_carried_over() {
        let record = AnalyzedString::new(7, sample_metrics(), Utc::now());

        assert_eq!(record.character_frequency.len(), 3);
        assert_eq!(record.character_frequency[&'a'], 1);
        let total: i64 = record.character_frequency.values().sum();
        assert_eq!(total, record.length);
    }
}
