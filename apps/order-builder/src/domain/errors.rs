//! Domain errors for request assembly.

use thiserror::Error;

/// A cross-field constraint violated while building a request.
///
/// Raised synchronously by `build`; the caller decides how to present it
/// (rejection message, usage error exit, retry with corrected input).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid --{option}: {message}")]
pub struct ValidationError {
    option: String,
    message: String,
}

impl ValidationError {
    /// Create a validation error for an option.
    #[must_use]
    pub fn new(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            message: message.into(),
        }
    }

    /// Name of the option the failure is attributed to.
    #[must_use]
    pub fn option(&self) -> &str {
        &self.option
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised when parsing wire strings into value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Value is not one of the accepted wire strings.
    #[error("Invalid {field} '{value}': expected one of {expected}")]
    UnknownValue {
        /// Field being parsed.
        field: &'static str,
        /// Rejected input.
        value: String,
        /// Accepted values, comma separated.
        expected: String,
    },
}

impl DomainError {
    pub(crate) fn unknown(field: &'static str, value: &str, expected: &[&str]) -> Self {
        Self::UnknownValue {
            field,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}
