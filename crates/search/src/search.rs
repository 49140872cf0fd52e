//! Ranking collections by fuzzy match score.

use crate::error::{Result, SearchError};
use crate::fuzzy::{fuzzy_match, FuzzyMatch};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Something that can be fuzzy searched.
///
/// String-like items return their text from [`Searchable::text`] and are
/// scored directly. Record-like items return `None` there and expose
/// named string fields through [`Searchable::field`]; they are scored against
/// each configured key.
pub trait Searchable {
    /// The item's own text, if the item is a plain string.
    fn text(&self) -> Option<&str> {
        None
    }

    /// A named string field. Missing keys and non-string values return `None`.
    fn field(&self, _key: &str) -> Option<&str> {
        None
    }
}

impl Searchable for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Searchable for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }

    fn field(&self, key: &str) -> Option<&str> {
        (**self).field(key)
    }
}

impl Searchable for serde_json::Value {
    fn text(&self) -> Option<&str> {
        self.as_str()
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(serde_json::Value::as_str)
    }
}

/// Options for [`fuzzy_search`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuzzySearchOptions {
    /// Fields to score on record-like items
    pub keys: Vec<String>,
    /// Minimum score to keep a result
    pub threshold: f64,
    /// Maximum number of results (`None` or `Some(0)` for all)
    pub limit: Option<usize>,
    /// Compare characters exactly instead of case-folded
    pub case_sensitive: bool,
}

impl Default for FuzzySearchOptions {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            threshold: 0.0,
            limit: None,
            case_sensitive: false,
        }
    }
}

impl FuzzySearchOptions {
    /// Adds a field to score on.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Sets the minimum score.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Caps the number of results. Zero means no cap.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Enables case-sensitive matching.
    pub fn case_sensitive(mut self, enabled: bool) -> Self {
        self.case_sensitive = enabled;
        self
    }

    /// Checks the options can be applied.
    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_nan() {
            return Err(SearchError::InvalidOptions("threshold must be a number".into()));
        }
        if self.keys.iter().any(String::is_empty) {
            return Err(SearchError::InvalidOptions(format!("empty key in {:?}", self.keys)));
        }
        Ok(())
    }
}

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzySearchResult<T> {
    /// The matched item
    pub item: T,
    /// Best score across the item's text or keys
    pub score: f64,
    /// Matched character indices in the winning text
    pub matches: Vec<usize>,
    /// Key that produced the best score, for record-like items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<String>,
}

/// Search `items` for `query` and return hits sorted by score, best first.
///
/// Items without a match, or scoring below `options.threshold`, are dropped.
/// Ties keep no particular order.
///
/// # Example
/// ```
/// use sveltacular_search::{fuzzy_search, FuzzySearchOptions};
///
/// let items = ["Settings", "Go to Profile", "Sign out"];
/// let results = fuzzy_search("gtp", &items, &FuzzySearchOptions::default());
/// assert_eq!(*results[0].item, "Go to Profile");
/// ```
pub fn fuzzy_search<'a, T>(query: &str, items: &'a [T], options: &FuzzySearchOptions) -> Vec<FuzzySearchResult<&'a T>>
where
    T: Searchable + Sync,
{
    #[cfg(feature = "parallel")]
    let mut results: Vec<_> = {
        use rayon::prelude::*;
        items
            .par_iter()
            .filter_map(|item| score_item(query, item, options))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<_> = items
        .iter()
        .filter_map(|item| score_item(query, item, options))
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    let matched = results.len();
    if let Some(limit) = options.limit.filter(|&limit| limit > 0) {
        results.truncate(limit);
    }

    debug!(query, items = items.len(), matched, returned = results.len(), "fuzzy search");
    results
}

/// Best match for one item, if it clears the threshold.
fn score_item<'a, T: Searchable>(query: &str, item: &'a T, options: &FuzzySearchOptions) -> Option<FuzzySearchResult<&'a T>> {
    let (best, matched_key) = match item.text() {
        Some(text) => (fuzzy_match(query, text, options.case_sensitive)?, None),
        None => best_key_match(query, item, options)?,
    };

    (best.score >= options.threshold).then(|| FuzzySearchResult {
        item,
        score: best.score,
        matches: best.matches,
        matched_key,
    })
}

fn best_key_match<T: Searchable>(query: &str, item: &T, options: &FuzzySearchOptions) -> Option<(FuzzyMatch, Option<String>)> {
    let mut best: Option<(FuzzyMatch, &str)> = None;

    for key in &options.keys {
        let Some(value) = item.field(key) else { continue };
        let Some(m) = fuzzy_match(query, value, options.case_sensitive) else { continue };

        if best.as_ref().map_or(true, |(b, _)| m.score > b.score) {
            best = Some((m, key.as_str()));
        }
    }

    best.map(|(m, key)| (m, Some(key.to_string())))
}
