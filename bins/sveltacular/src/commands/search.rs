//! `sveltacular search` and `sveltacular match`

use crate::output::{self, Status};
use crate::Format;
use serde_json::Value;
use std::path::{Path, PathBuf};
use sveltacular_core::config::SearchConfig;
use sveltacular_core::{Error, ResultExt};
use sveltacular_search::{fuzzy_match, fuzzy_search, highlight_matches, FuzzySearchResult};
use tracing::debug;

/// Arguments for the search command.
pub struct SearchArgs {
    pub query: String,
    pub items: Vec<String>,
    pub file: Option<PathBuf>,
    pub keys: Vec<String>,
    pub limit: Option<usize>,
    pub threshold: Option<f64>,
    pub case_sensitive: bool,
    pub highlight: bool,
}

pub fn run(args: &SearchArgs, defaults: &SearchConfig, format: Format) -> anyhow::Result<bool> {
    let mut config = defaults.clone();
    if !args.keys.is_empty() {
        config.keys = args.keys.clone();
    }
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    config.case_sensitive |= args.case_sensitive;
    let options = config.to_options()?;

    let items = match &args.file {
        Some(path) => load_items(path)?,
        None => args.items.iter().cloned().map(Value::String).collect(),
    };
    debug!(items = items.len(), keys = ?options.keys, "loaded search items");

    let results = fuzzy_search(&args.query, &items, &options);

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        Format::Text => {
            if results.is_empty() {
                Status::info(&format!("No matches for '{}'", args.query));
            }
            for result in &results {
                println!("{:>8.3}  {}", result.score, label(result, args.highlight));
            }
            if !results.is_empty() {
                Status::success(&output::format_count(results.len(), "result", "results"));
            }
        }
    }

    Ok(!results.is_empty())
}

pub fn run_match(query: &str, target: &str, case_sensitive: bool, format: Format) -> anyhow::Result<bool> {
    let result = fuzzy_match(query, target, case_sensitive);

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        Format::Text => match &result {
            Some(m) => {
                Status::success(&highlight_matches(target, &m.matches));
                println!("score:   {:.3}", m.score);
                println!("indices: {:?}", m.matches);
            }
            None => Status::info(&format!("'{}' does not match '{}'", query, target)),
        },
    }

    Ok(result.is_some())
}

fn load_items(path: &Path) -> sveltacular_core::Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Reading {}", path.display()))?;

    let value: Value = serde_json::from_str(&content)
        .map_err(Error::from)
        .context(format!("Parsing {}", path.display()))?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(Error::new(
            sveltacular_core::ErrorCode::InvalidJson,
            format!("{} must contain a JSON array", path.display()),
        )),
    }
}

/// Text shown for a hit: the winning string, optionally highlighted.
fn label(result: &FuzzySearchResult<&Value>, highlight: bool) -> String {
    let text = match (&result.matched_key, result.item) {
        (Some(key), item) => item.get(key).and_then(Value::as_str),
        (None, item) => item.as_str(),
    };

    match text {
        Some(text) if highlight => highlight_matches(text, &result.matches),
        Some(text) => text.to_string(),
        None => result.item.to_string(),
    }
}
