//! # Theme Error Types
//!
//! Specific, context-rich error types for the settings engine. Store
//! mutators never return these; they only surface from the persistence
//! backends and from color validation.

use thiserror::Error;

/// Errors that can occur in the settings engine.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A color value failed validation.
    #[error("invalid color value '{value}': {details}")]
    InvalidColor {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        details: &'static str,
    },

    /// The durable storage backend could not be set up.
    #[error("storage backend unavailable: {details}")]
    StorageUnavailable {
        /// Details about the failure.
        details: String,
    },

    /// Generic I/O error from a storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing persisted state.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for engine operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, details: &'static str) -> Self {
        Self::InvalidColor {
            value: value.into(),
            details,
        }
    }

    /// Create a storage unavailable error from any error type.
    pub fn storage_unavailable(source: impl std::fmt::Display) -> Self {
        Self::StorageUnavailable {
            details: source.to_string(),
        }
    }
}
