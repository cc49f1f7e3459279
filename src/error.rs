//! This module defines all error types used throughout the application.

use std::io;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Rejected batch-run input
    #[error("Invalid number of simulations {input:?}: {reason}")]
    InvalidTrialCount { input: String, reason: String },

    /// TUI/terminal errors
    #[error("TUI error: {0}")]
    Tui(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create a trial count validation error
    pub fn invalid_trial_count(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTrialCount {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a TUI error
    pub fn tui(err: impl std::fmt::Display) -> Self {
        Self::Tui(err.to_string())
    }

    /// Check if the error comes from user input rather than the environment
    pub fn is_user_input(&self) -> bool {
        matches!(self, Error::InvalidTrialCount { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::custom("test error");
        assert_eq!(err.to_string(), "test error");

        let err = Error::invalid_trial_count("-5", "must be a positive number");
        assert_eq!(
            err.to_string(),
            "Invalid number of simulations \"-5\": must be a positive number"
        );

        let err = Error::config("tick rate must be positive");
        assert_eq!(err.to_string(), "Configuration error: tick rate must be positive");
    }

    #[test]
    fn test_error_conversions() {
        let err: Error = std::io::Error::other("disk full").into();
        assert!(matches!(err, Error::Io(_)));

        let json = serde_json::from_str::<u64>("nope").unwrap_err();
        let err: Error = json.into();
        assert!(matches!(err, Error::Json(_)));

        let err = Error::tui("terminal gone");
        assert!(matches!(err, Error::Tui(ref msg) if msg == "terminal gone"));
        assert!(!err.is_user_input());
    }

    #[test]
    fn test_user_input() {
        let err = Error::invalid_trial_count("abc", "not a number");
        assert!(err.is_user_input());

        let err = Error::custom("other");
        assert!(!err.is_user_input());
    }
}
