//! Fuzzy search for Sveltacular searchable lists and command palettes.
//!
//! This crate provides:
//! - Scored fuzzy matching with contiguity, word-boundary and camelCase bonuses
//! - Ranked search over strings, JSON values and custom record types
//! - `<mark>` highlighting of matched characters
//! - Optional parallel scoring and WASM bindings

mod error;
mod fuzzy;
mod highlight;
mod search;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Result, SearchError, SearchErrorCode};
pub use fuzzy::{fuzzy_match, FuzzyMatch};
pub use highlight::highlight_matches;
pub use search::{fuzzy_search, FuzzySearchOptions, FuzzySearchResult, Searchable};
