//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while preparing a search.
///
/// Matching itself never fails; "no match" is `None`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Search options that cannot be applied
    #[error("Invalid search options: {0}")]
    InvalidOptions(String),
}

/// Error code for integration with sveltacular-core error handling.
/// Range: 13xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Search options that cannot be applied
    InvalidOptions = 13001,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidOptions(_) => SearchErrorCode::InvalidOptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = SearchError::InvalidOptions("threshold must be a number".into());
        assert_eq!(err.code(), SearchErrorCode::InvalidOptions);
        assert_eq!(err.code() as u32, 13001);
        assert_eq!(err.to_string(), "Invalid search options: threshold must be a number");
    }
}
