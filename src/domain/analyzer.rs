//! String analysis: derives every stored metric from a raw input string.

use sha2::{Digest, Sha256};
use std::collections::HashMap;

use crate::domain::entities::NewAnalyzedString;

/// Computes the full set of derived metrics for `raw`.
///
/// The input is trimmed of leading and trailing whitespace first; the
/// trimmed value is both the basis of every metric and the identity under
/// which the record is stored (no separate raw value is retained).
///
/// A "character" is one Unicode scalar value throughout: `length`,
/// `unique_characters`, the palindrome reversal, and the frequency map keys
/// all count scalar values, matching code-point semantics across languages.
///
/// Total over all inputs: the empty string (or an all-whitespace input)
/// yields a valid record with zero counts, an empty frequency map, and
/// `is_palindrome = true`.
pub fn analyze(raw: &str) -> NewAnalyzedString {
    let value = raw.trim();

    let mut character_frequency: HashMap<char, i64> = HashMap::new();
    for c in value.chars() {
        *character_frequency.entry(c).or_insert(0) += 1;
    }

    // Case-insensitive comparison against the character-reversed value:
    // both sides are lowercased after reversal, so inputs whose lowercase
    // form expands to multiple characters still compare consistently.
    let reversed: String = value.chars().rev().collect();
    let is_palindrome = value.to_lowercase() == reversed.to_lowercase();

    NewAnalyzedString {
        value: value.to_string(),
        length: value.chars().count() as i64,
        is_palindrome,
        unique_characters: character_frequency.len() as i64,
        word_count: value.split_whitespace().count() as i64,
        content_hash: hex::encode(Sha256::digest(value.as_bytes())),
        character_frequency,
    }
}
