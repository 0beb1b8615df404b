//! Input abstraction for statistics
//!
//! Turns text from various sources into a validated [`TextSnapshot`].

use crate::error::Result;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use wordtally_core::TextSnapshot;

/// Unified input abstraction
pub enum Input {
    /// Direct text string
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to decode as UTF-8
    Bytes(Vec<u8>),
    /// Reader stream (stdin, pipes)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the input and validate it as UTF-8
    ///
    /// # Errors
    ///
    /// I/O failures surface as [`EngineError::Io`](crate::EngineError::Io),
    /// malformed UTF-8 as `InvalidText`.
    pub fn into_snapshot(self) -> Result<TextSnapshot> {
        match self {
            Input::Text(text) => Ok(TextSnapshot::new(text)),
            other => Ok(TextSnapshot::from_utf8(other.into_bytes()?)?),
        }
    }

    /// Read the input, replacing malformed UTF-8 with U+FFFD
    pub fn into_snapshot_lossy(self) -> Result<TextSnapshot> {
        match self {
            Input::Text(text) => Ok(TextSnapshot::new(text)),
            other => Ok(TextSnapshot::from_utf8_lossy(&other.into_bytes()?)),
        }
    }

    /// Get the size of the input in bytes, if known without reading it
    pub fn estimated_size(&self) -> Option<usize> {
        match self {
            Input::Text(text) => Some(text.len()),
            Input::Bytes(bytes) => Some(bytes.len()),
            Input::File(path) => fs::metadata(path).ok().map(|m| m.len() as usize),
            Input::Reader(_) => None,
        }
    }

    fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::File(path) => Ok(fs::read(path)?),
            Input::Bytes(bytes) => Ok(bytes),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
