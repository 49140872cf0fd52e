//! Error types for the position crate.

use thiserror::Error;

/// Result type alias for position operations.
pub type Result<T> = std::result::Result<T, PositionError>;

/// Errors that can occur while preparing a positioning call.
///
/// The engine itself never fails; these only come from parsing host input.
#[derive(Debug, Error)]
pub enum PositionError {
    /// Placement string with an unknown side or alignment
    #[error("Invalid placement: {0}")]
    InvalidPlacement(String),
}

/// Error code for integration with sveltacular-core error handling.
/// Range: 12xxx for position errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionErrorCode {
    /// Placement string with an unknown side or alignment
    InvalidPlacement = 12001,
}

impl PositionError {
    /// Returns the error code for this error.
    pub fn code(&self) -> PositionErrorCode {
        match self {
            PositionError::InvalidPlacement(_) => PositionErrorCode::InvalidPlacement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PositionError::InvalidPlacement("middle".into());
        assert_eq!(err.code(), PositionErrorCode::InvalidPlacement);
        assert_eq!(err.code() as u32, 12001);
        assert_eq!(err.to_string(), "Invalid placement: middle");
    }
}
