//! Approximate string matching for free-text queries.
//!
//! Matching is case-insensitive and proceeds through three tiers: exact
//! substring containment, containment after stripping whitespace from both
//! sides, then normalized Levenshtein similarity with a fixed threshold.

use serde::{Deserialize, Serialize};

use crate::util::levenshtein::similarity;

/// Minimum normalized similarity for a fuzzy comparison to count as a match.
pub const MIN_SIMILARITY: f64 = 0.6;

/// Score for a substring hit found only after removing whitespace.
const DESPACED_SCORE: f64 = 0.9;

/// Outcome of scoring a query against a field value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzyScore {
    /// Similarity score in `0.0..=1.0`.
    pub score: f64,
    /// Whether this comparison counts as a match.
    pub matched: bool,
}

impl FuzzyScore {
    fn miss() -> Self {
        FuzzyScore {
            score: 0.0,
            matched: false,
        }
    }
}

/// Score the similarity between a query and a candidate text.
///
/// Pure and deterministic. Not guaranteed symmetric for differing-length
/// inputs beyond what the underlying edit-distance metric provides; callers
/// should treat `fuzzy_score(a, b)` and `fuzzy_score(b, a)` as independent.
pub fn fuzzy_score(query: &str, text: &str) -> FuzzyScore {
    let query = query.trim().to_lowercase();
    let text = text.trim().to_lowercase();

    if query.is_empty() || text.is_empty() {
        return FuzzyScore::miss();
    }

    if text.contains(&query) {
        return FuzzyScore {
            score: 1.0,
            matched: true,
        };
    }

    let despaced_query: String = query.split_whitespace().collect();
    let despaced_text: String = text.split_whitespace().collect();
    if despaced_text.contains(&despaced_query) {
        return FuzzyScore {
            score: DESPACED_SCORE,
            matched: true,
        };
    }

    let score = similarity(&query, &text);
    FuzzyScore {
        score,
        matched: score >= MIN_SIMILARITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_string_is_perfect_match() {
        for input in ["dune", "The Left Hand of Darkness", "a"] {
            let result = fuzzy_score(input, input);
            assert_eq!(result.score, 1.0, "score for {input:?}");
            assert!(result.matched);
        }
    }

    #[test]
    fn test_substring_containment() {
        let result = fuzzy_score("hobbit", "The Hobbit, or There and Back Again");
        assert_eq!(result.score, 1.0);
        assert!(result.matched);
    }

    #[test]
    fn test_despaced_containment() {
        let result = fuzzy_score("earth sea", "earthsea");
        assert_eq!(result.score, 0.9);
        assert!(result.matched);
    }

    #[test]
    fn test_fuzzy_threshold() {
        // One edit over a six-character word clears 0.6 comfortably.
        let close = fuzzy_score("gatsby", "gatsbe");
        assert!(close.matched);
        assert!(close.score >= MIN_SIMILARITY);

        let far = fuzzy_score("gatsby", "moby dick");
        assert!(!far.matched);
        assert!(far.score < MIN_SIMILARITY);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(fuzzy_score("", "anything"), FuzzyScore::miss());
        assert_eq!(fuzzy_score("anything", ""), FuzzyScore::miss());
        assert_eq!(fuzzy_score("   ", "anything"), FuzzyScore::miss());
    }

    #[test]
    fn test_case_insensitive() {
        let result = fuzzy_score("DUNE", "dune messiah");
        assert_eq!(result.score, 1.0);
        assert!(result.matched);
    }
}
