//! Filter conditions over stored records and the natural-language
//! interpreter that produces them from free text.

use crate::domain::entities::AnalyzedString;

/// Conjunction of optional match conditions over [`AnalyzedString`] records.
///
/// The default filter carries no conditions and matches every record. The
/// structured list endpoint fills the inclusive `min_length`/`max_length`
/// bounds; the natural-language interpreter fills the strict
/// `longer_than`/`shorter_than` bounds. Every present condition must hold
/// for a record to match, so combining bounds yields a range filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringFilter {
    /// Inclusive lower bound on `length`.
    pub min_length: Option<i64>,
    /// Inclusive upper bound on `length`.
    pub max_length: Option<i64>,
    pub is_palindrome: Option<bool>,
    /// Strict lower bound on `length`.
    pub longer_than: Option<i64>,
    /// Strict upper bound on `length`.
    pub shorter_than: Option<i64>,
}

impl StringFilter {
    /// Adds inclusive length bounds to the filter.
    pub fn with_length_bounds(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Adds palindrome matching to the filter.
    ///
    /// `Some(false)` keeps only non-palindromes; `None` leaves the
    /// condition out entirely.
    pub fn with_palindrome(mut self, flag: Option<bool>) -> Self {
        self.is_palindrome = flag;
        self
    }

    /// Returns true when the record satisfies every present condition.
    pub fn matches(&self, record: &AnalyzedString) -> bool {
        if let Some(min) = self.min_length
            && record.length < min
        {
            return false;
        }
        if let Some(max) = self.max_length
            && record.length > max
        {
            return false;
        }
        if let Some(flag) = self.is_palindrome
            && record.is_palindrome != flag
        {
            return false;
        }
        if let Some(bound) = self.longer_than
            && record.length <= bound
        {
            return false;
        }
        if let Some(bound) = self.shorter_than
            && record.length >= bound
        {
            return false;
        }

        true
    }
}

/// Interprets a free-text query into a [`StringFilter`].
///
/// Recognition is a deterministic substring scan over the lower-cased query
/// text; it is best-effort by design and never fails:
///
/// - `"palindrome"` anywhere adds `is_palindrome == true`
/// - `"longer than"` followed by an integer token adds `length > n`
/// - `"shorter than"` followed by an integer token adds `length < n`
///
/// A phrase whose trailing token is missing or non-numeric contributes
/// nothing, without affecting the other conditions; only the first
/// occurrence of each phrase is scanned. A query with no recognized phrase
/// (including the empty query) yields the match-all filter.
pub fn interpret(query: &str) -> StringFilter {
    let normalized = query.to_lowercase();

    StringFilter {
        is_palindrome: normalized.contains("palindrome").then_some(true),
        longer_than: number_after(&normalized, "longer than"),
        shorter_than: number_after(&normalized, "shorter than"),
        ..StringFilter::default()
    }
}

/// First whitespace-delimited token after the first occurrence of `phrase`,
/// parsed as a base-10 integer.
///
/// `None` when the phrase is absent, nothing follows it, or the token does
/// not parse.
fn number_after(text: &str, phrase: &str) -> Option<i64> {
    let (_, rest) = text.split_once(phrase)?;
    rest.split_whitespace().next()?.parse().ok()
}
