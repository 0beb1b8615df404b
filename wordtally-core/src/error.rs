//! Error types for boundary analysis

use thiserror::Error;

/// Unit in which an [`CoreError::InvalidText`] position is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextUnit {
    /// UTF-8 byte offset
    Byte,
    /// UTF-16 code unit offset
    CodeUnit,
    /// Index into a sequence of raw scalar values
    Scalar,
}

impl std::fmt::Display for TextUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextUnit::Byte => write!(f, "byte"),
            TextUnit::CodeUnit => write!(f, "code unit"),
            TextUnit::Scalar => write!(f, "scalar value"),
        }
    }
}

/// Core-level errors (Domain Layer)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The input is not valid Unicode
    #[error("invalid text at {unit} {position}: {reason}")]
    InvalidText {
        /// Position of the first invalid unit
        position: usize,
        /// Unit the position is counted in
        unit: TextUnit,
        /// What was wrong with the input
        reason: String,
    },

    /// No segmentation rules are available for the requested locale
    #[error("locale '{tag}' not supported")]
    UnsupportedLocale {
        /// The locale tag that was requested
        tag: String,
    },
}

impl CoreError {
    /// Whether this error is recoverable by retrying with another locale
    pub fn is_locale_error(&self) -> bool {
        matches!(self, CoreError::UnsupportedLocale { .. })
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
