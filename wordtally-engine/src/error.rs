//! Layered error types
//!
//! Core failures are wrapped, never flattened, so callers can still match on
//! [`CoreError::InvalidText`].

use thiserror::Error;
use wordtally_core::CoreError;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Boundary analysis error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The background worker is no longer running
    #[error("statistics worker disconnected")]
    WorkerDisconnected,
}

impl EngineError {
    /// Whether this error means the input text was not valid Unicode
    pub fn is_invalid_text(&self) -> bool {
        matches!(self, EngineError::Core(CoreError::InvalidText { .. }))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
