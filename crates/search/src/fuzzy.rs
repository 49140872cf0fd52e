//! Fuzzy matching with contiguity, word-boundary and camelCase bonuses.

use serde::{Deserialize, Serialize};

/// Base score per matched character.
const MATCH_SCORE: f64 = 1.0;
/// Multiplied by the length of the current consecutive run.
const CONSECUTIVE_BONUS: f64 = 5.0;
/// Match at the start of the target or after a space or hyphen.
const WORD_BOUNDARY_BONUS: f64 = 10.0;
/// Match on an uppercase letter.
const CAMEL_CASE_BONUS: f64 = 5.0;

/// A successful fuzzy match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    /// Score normalized by target length. Higher is better; not bounded to `[0, 1]`.
    pub score: f64,
    /// Character indices in the target, one per query character, strictly increasing.
    pub matches: Vec<usize>,
}

impl FuzzyMatch {
    /// The match returned for an empty query.
    pub fn everything() -> Self {
        Self {
            score: 1.0,
            matches: Vec::new(),
        }
    }
}

/// Match `query` against `target`, characters in order but not necessarily adjacent.
///
/// Indices are character positions (Unicode scalar values), not byte offsets.
/// An empty query matches everything with score 1.
///
/// # Arguments
/// * `query` - Characters to find
/// * `target` - Text to search in
/// * `case_sensitive` - Compare characters exactly instead of case-folded
///
/// # Returns
/// `None` if not every query character is found in order
///
/// # Example
/// ```
/// use sveltacular_search::fuzzy_match;
///
/// let m = fuzzy_match("gtp", "Go to Profile", false).unwrap();
/// assert_eq!(m.matches, vec![0, 3, 6]);
/// ```
pub fn fuzzy_match(query: &str, target: &str, case_sensitive: bool) -> Option<FuzzyMatch> {
    if query.is_empty() {
        return Some(FuzzyMatch::everything());
    }
    if target.is_empty() {
        return None;
    }

    let query: Vec<char> = query.chars().collect();
    let mut indices = Vec::with_capacity(query.len());
    let mut score = 0.0;
    let mut run = 0u32;
    let mut prev_char: Option<char> = None;
    let mut target_len = 0usize;

    for (index, c) in target.chars().enumerate() {
        target_len += 1;

        if let Some(&wanted) = query.get(indices.len()) {
            if chars_equal(c, wanted, case_sensitive) {
                score += MATCH_SCORE;

                if indices.last().is_some_and(|&last| last + 1 == index) {
                    run += 1;
                    score += CONSECUTIVE_BONUS * f64::from(run);
                } else {
                    run = 0;
                }

                if index == 0 || matches!(prev_char, Some(' ' | '-')) {
                    score += WORD_BOUNDARY_BONUS;
                }

                if is_uppercase_letter(c) {
                    score += CAMEL_CASE_BONUS;
                }

                indices.push(index);
            }
        }

        prev_char = Some(c);
    }

    if indices.len() < query.len() {
        return None;
    }

    Some(FuzzyMatch {
        score: score / target_len as f64,
        matches: indices,
    })
}

/// Per-character comparison so indices stay aligned with the original target
/// even for characters whose lowercase form is several characters long.
#[inline]
fn chars_equal(a: char, b: char, case_sensitive: bool) -> bool {
    if case_sensitive || a == b {
        return a == b;
    }
    a.to_lowercase().eq(b.to_lowercase())
}

#[inline]
fn is_uppercase_letter(c: char) -> bool {
    c.is_uppercase() && !c.to_lowercase().eq(std::iter::once(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(fuzzy_match("", "anything", false), Some(FuzzyMatch::everything()));
        assert_eq!(fuzzy_match("", "", false), Some(FuzzyMatch::everything()));
    }

    #[test]
    fn test_empty_target_no_match() {
        assert_eq!(fuzzy_match("a", "", false), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(fuzzy_match("xyz", "hello world", false), None);
    }

    #[test]
    fn test_out_of_order_no_match() {
        assert_eq!(fuzzy_match("lhe", "hello", false), None);
    }

    #[test]
    fn test_case_insensitive_by_default() {
        assert!(fuzzy_match("Hello", "hello", false).is_some());
        assert!(fuzzy_match("Hello", "hello", true).is_none());
        assert!(fuzzy_match("hello", "hello", true).is_some());
    }

    #[test]
    fn test_consecutive_beats_scattered() {
        let contiguous = fuzzy_match("hel", "hello", false).unwrap();
        let scattered = fuzzy_match("hlo", "hello", false).unwrap();
        assert!(contiguous.score > scattered.score);
        // 11 + 6 + 11 over 5 characters
        assert!((contiguous.score - 5.6).abs() < 1e-9);
        // 11 + 1 + 1 over 5 characters
        assert!((scattered.score - 2.6).abs() < 1e-9);
    }

    #[test]
    fn test_word_boundaries() {
        let m = fuzzy_match("gtp", "Go to Profile", false).unwrap();
        assert_eq!(m.matches, vec![0, 3, 6]);
        // G: 1 + 10 + 5, t: 1 + 10, P: 1 + 10 + 5
        assert!((m.score - 43.0 / 13.0).abs() < 1e-9);
        assert!(m.score > 1.0);
    }

    #[test]
    fn test_hyphen_boundary() {
        let m = fuzzy_match("b", "a-b", false).unwrap();
        assert!((m.score - 11.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_camel_case_bonus() {
        let camel = fuzzy_match("b", "fooBar", false).unwrap();
        let lower = fuzzy_match("b", "foobar", false).unwrap();
        assert!(camel.score > lower.score);
    }

    #[test]
    fn test_digits_get_no_camel_bonus() {
        let m = fuzzy_match("1", "a1", false).unwrap();
        assert!((m.score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_indices_are_char_positions() {
        let m = fuzzy_match("\u{e9}c", "caf\u{e9} cr\u{e8}me", false).unwrap();
        assert_eq!(m.matches, vec![3, 5]);
        let m = fuzzy_match("\u{c9}", "\u{e9}t\u{e9}", false).unwrap();
        assert_eq!(m.matches, vec![0]);
    }

    proptest! {
        #[test]
        fn prop_matches_cover_query_in_order(query in "[a-cA-C ]{0,4}", target in "[a-cA-C -]{0,12}") {
            if let Some(m) = fuzzy_match(&query, &target, false) {
                prop_assert_eq!(m.matches.len(), query.chars().count());
                prop_assert!(m.matches.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(m.score >= 0.0);
            }
        }

        #[test]
        fn prop_subsequence_always_matches(target in "[a-z]{1,16}", mask in prop::collection::vec(any::<bool>(), 16)) {
            let query: String = target.chars().zip(mask).filter(|(_, keep)| *keep).map(|(c, _)| c).collect();
            prop_assert!(fuzzy_match(&query, &target, true).is_some());
        }
    }
}
