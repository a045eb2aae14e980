//! Error types for the bank workspace
//!
//! Every failure surfaced by the account model and the service layer is one
//! variant of [`Error`]. Rejected amounts are reported as [`Error::OutOfRange`]
//! together with the name of the offending parameter, so callers can match on
//! the field instead of parsing the message.

use std::fmt::Display;
use thiserror::Error;

/// Bank error type
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter value is outside the range the operation accepts
    #[error("{message} (Parameter '{field}')")]
    OutOfRange {
        /// Name of the rejected parameter
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// An operation could not be parsed
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Decimal conversion error
    #[error("Decimal conversion error: {0}")]
    DecimalError(String),
}

impl Error {
    /// Build an out-of-range error for `field`
    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        Error::OutOfRange {
            field,
            message: message.into(),
        }
    }

    /// Name of the rejected parameter, if this is an out-of-range error
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::OutOfRange { field, .. } => Some(*field),
            _ => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::OutOfRange { field, message } => Error::OutOfRange {
                    field,
                    message: format!("{}: {}", context, message),
                },
                Error::InvalidOperation(msg) => Error::InvalidOperation(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context, msg)),
                Error::Serialization(e) => Error::Serialization(e),
                Error::DecimalError(msg) => Error::DecimalError(format!("{}: {}", context, msg)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display_names_parameter() {
        let err = Error::out_of_range("amount", "Debit amount exceeds balance");
        assert_eq!(
            err.to_string(),
            "Debit amount exceeds balance (Parameter 'amount')"
        );
        assert_eq!(err.field(), Some("amount"));
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_with_context_keeps_field() {
        let result: Result<()> = Err(Error::out_of_range("amount", "too small"));
        let err = result.with_context(|| "Debit of -1").unwrap_err();

        match err {
            Error::OutOfRange { field, message } => {
                assert_eq!(field, "amount");
                assert_eq!(message, "Debit of -1: too small");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_with_context_prefixes_string_variants() {
        let result: Result<()> = Err(Error::ConfigurationError("bad balance".to_string()));
        let err = result.with_context(|| "Loading config").unwrap_err();

        assert_eq!(err.to_string(), "Configuration error: Loading config: bad balance");
    }

    #[test]
    fn test_field_is_none_for_other_kinds() {
        let err = Error::InvalidOperation("withdraw:10".to_string());
        assert_eq!(err.field(), None);
        assert!(!err.is_out_of_range());
    }
}
