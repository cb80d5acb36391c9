//! Error types for the bmi_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Rejection of a height/weight pair before any arithmetic runs.
///
/// Every variant is terminal for the evaluation that produced it; the caller
/// has to ask for corrected input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or both fields were left empty
    #[error("Please enter both height and weight.")]
    MissingInput,

    /// Height did not parse to a positive, finite number
    #[error("Height must be a positive number.")]
    NonPositiveHeight,

    /// Weight did not parse to a positive, finite number
    #[error("Weight must be a positive number.")]
    NonPositiveWeight,
}

/// Core error type for bmi_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Measurement validation error
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingInput.to_string(),
            "Please enter both height and weight."
        );
        assert_eq!(
            ValidationError::NonPositiveHeight.to_string(),
            "Height must be a positive number."
        );
        assert_eq!(
            ValidationError::NonPositiveWeight.to_string(),
            "Weight must be a positive number."
        );
    }

    #[test]
    fn test_validation_converts_into_error() {
        let err: Error = ValidationError::NonPositiveWeight.into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NonPositiveWeight)
        ));
        // Wrapping does not decorate the user-facing message
        assert_eq!(err.to_string(), "Weight must be a positive number.");
    }
}
