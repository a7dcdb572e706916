// src/error.rs

use thiserror::Error;

/// Result alias for the fallible (non-core) parts of the crate.
pub type Result<T> = std::result::Result<T, PalprimeError>;

#[derive(Debug, Error)]
pub enum PalprimeError {
    /// Input that does not parse as an integer
    #[error("Both limits must be valid integers, got '{0}'")]
    InvalidNumber(String),

    /// Limits that violate upper > lower > 0
    #[error("Lower limit must be less than the upper limit and both greater than 0 (got {lower} and {upper})")]
    InvalidRange { lower: i128, upper: i128 },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input ended before a valid range was read
    #[error("Input closed before a valid range was entered")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PalprimeError::InvalidNumber("abc".to_string());
        assert_eq!(err.to_string(), "Both limits must be valid integers, got 'abc'");

        let err = PalprimeError::InvalidRange { lower: 5, upper: 2 };
        assert!(err.to_string().contains("got 5 and 2"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: PalprimeError = io.into();
        assert!(matches!(err, PalprimeError::Io(_)));
    }
}
