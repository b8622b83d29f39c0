//! # Error Types
//!
//! Structured error types for beam_core. Validation failures carry the
//! offending field, its value and a human-readable reason so that callers can
//! point the user at the input that needs fixing.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "beam_length_m",
//!             length_m.to_string(),
//!             "Beam length must be greater than zero",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
///
/// The numeric core never produces errors of its own: every variant is raised
/// either by input validation, by catalog lookups, or by the file helpers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, inconsistent, non-finite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Several inputs are invalid (multi-error validation mode)
    #[error("Validation failed with {} problem(s)", violations.len())]
    ValidationFailed { violations: Vec<CalcError> },

    /// Material key not found in the catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Section shape tag not recognized
    #[error("Unknown cross-section shape: {shape}")]
    UnknownSection { shape: String },

    /// File I/O error
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
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an UnknownSection error
    pub fn unknown_section(shape: impl Into<String>) -> Self {
        CalcError::UnknownSection { shape: shape.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the user can correct this error by editing the request
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::ValidationFailed { .. }
                | CalcError::MaterialNotFound { .. }
                | CalcError::UnknownSection { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ValidationFailed { .. } => "VALIDATION_FAILED",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::UnknownSection { .. } => "UNKNOWN_SECTION",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input(
            "beam_length_m",
            "-5",
            "Beam length must be greater than zero",
        );
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let back: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, back);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::material_not_found("granite").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::unknown_section("Z-beam").error_code(), "UNKNOWN_SECTION");
        let aggregate = CalcError::ValidationFailed {
            violations: vec![CalcError::invalid_input("a", "0", "bad")],
        };
        assert_eq!(aggregate.error_code(), "VALIDATION_FAILED");
        assert_eq!(aggregate.to_string(), "Validation failed with 1 problem(s)");
    }

    #[test]
    fn test_user_correctable() {
        assert!(CalcError::invalid_input("x", "1", "r").is_user_correctable());
        assert!(!CalcError::file_error("read", "a.json", "missing").is_user_correctable());
    }
}
