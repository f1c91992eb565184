//! Error types for the Fibonacci CLI
//!
//! Messages are meant to be read directly by whoever typed the command,
//! with a hint on how to recover where one exists.

use thiserror::Error;

use crate::fib::MAX_INDEX;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Fibonacci CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Computation Errors ===
    #[error("Invalid index {0}: Fibonacci indices must be non-negative")]
    InvalidIndex(i64),

    #[error("F({index}) does not fit in 128 bits. The largest supported index is {max}", max = MAX_INDEX)]
    Overflow { index: i64 },

    #[error("Index {index} exceeds the configured limit of {max}. Raise 'limits.max_index' in the config file")]
    IndexTooLarge { index: i64, max: u32 },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Scenario Errors ===
    #[error("Scenario assertion failed: {0}")]
    TestAssertion(String),
}

impl Error {
    /// Create an index-too-large error for a configured limit
    pub fn index_too_large(index: i64, max: u32) -> Self {
        Self::IndexTooLarge { index, max }
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidIndex(_) => "INVALID_INDEX",
            Error::Overflow { .. } => "OVERFLOW",
            Error::IndexTooLarge { .. } => "INDEX_TOO_LARGE",
            Error::Config(_) | Error::ConfigParse(_) => "CONFIG_ERROR",
            Error::FileRead { .. } => "IO_ERROR",
            Error::Json(_) => "SERIALIZATION_ERROR",
            Error::TestAssertion(_) => "ASSERTION_FAILED",
        }
    }
}

/// Serializable error for JSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
}

impl From<&Error> for ErrorReport {
    fn from(e: &Error) -> Self {
        Self {
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_report() {
        let report = ErrorReport::from(&Error::InvalidIndex(-1));
        assert_eq!(report.code, "INVALID_INDEX");
        assert!(report.message.contains("-1"));
    }

    #[test]
    fn test_file_read_code() {
        let err = Error::FileRead {
            path: "scenario.yaml".to_string(),
            error: "not found".to_string(),
        };
        assert_eq!(err.code(), "IO_ERROR");
        assert!(err.to_string().contains("scenario.yaml"));
    }

    #[test]
    fn test_overflow_message_names_limit() {
        let msg = Error::Overflow { index: 200 }.to_string();
        assert!(msg.contains("F(200)"));
        assert!(msg.contains("186"));
    }
}
