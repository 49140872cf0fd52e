//! WASM bindings for search utilities.

use crate::{fuzzy_match, fuzzy_search, highlight_matches, FuzzySearchOptions};
use wasm_bindgen::prelude::*;

/// Score `query` against `target`.
///
/// # Returns
/// JSON `{"score": .., "matches": [..]}`, or `null` when nothing matches
#[wasm_bindgen(js_name = fuzzyMatch)]
pub fn fuzzy_match_json(query: &str, target: &str, case_sensitive: bool) -> String {
    match fuzzy_match(query, target, case_sensitive) {
        Some(m) => serde_json::to_string(&m).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    }
}

/// Search items and return ranked results as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of strings and/or objects
/// * `options_json` - JSON search options (`keys`, `threshold`, `limit`, `caseSensitive`); empty for defaults
///
/// # Returns
/// JSON array of `{item, score, matches, matchedKey?}` sorted by score
#[wasm_bindgen(js_name = fuzzySearch)]
pub fn fuzzy_search_json(query: &str, items_json: &str, options_json: &str) -> Result<String, JsValue> {
    let items: Vec<serde_json::Value> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let options: FuzzySearchOptions = if options_json.trim().is_empty() {
        FuzzySearchOptions::default()
    } else {
        serde_json::from_str(options_json)
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?
    };
    options.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let results = fuzzy_search(query, &items, &options);

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Wrap matched characters in `<mark>` tags. No HTML escaping is applied.
#[wasm_bindgen(js_name = highlightMatches)]
pub fn highlight(s: &str, matches: Vec<u32>) -> String {
    let matches: Vec<usize> = matches.into_iter().map(|m| m as usize).collect();
    highlight_matches(s, &matches)
}
