//! # Error Types
//!
//! Structured error types for beam_core. Every failure carries enough context
//! (which field, what value, why it was rejected) for a caller to report it
//! or fix the input programmatically.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "span_m".to_string(),
//!             value: span_m.to_string(),
//!             reason: "Span must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for statics operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive geometry, out-of-range position, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Reading a settings or scenario file failed
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// True when the caller supplied a bad value (as opposed to an I/O problem)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject NaN and infinities before any arithmetic sees them.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"))
    }
}

/// Require a strictly positive, finite value.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("span_m", "-5", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("x", "1", "bad").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::file_error("read", "a.json", "missing").error_code(), "FILE_ERROR");
        assert_eq!(CalcError::serialization("eof").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("e_pa", 210e9).is_ok());
        assert!(require_positive("e_pa", 0.0).unwrap_err().is_invalid_input());
        assert!(require_positive("e_pa", -1.0).is_err());
        assert!(require_positive("e_pa", f64::NAN).is_err());
        assert!(require_positive("e_pa", f64::INFINITY).is_err());
    }

    #[test]
    fn test_serde_json_error_converts() {
        let err: CalcError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
