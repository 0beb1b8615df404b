//! Immutable, validated text snapshots
//!
//! A [`TextSnapshot`] is the only input the analyzers accept. Every way of
//! building one validates the text up front, so an analyzer never has to
//! deal with malformed Unicode in the middle of a scan.

use crate::error::{CoreError, Result, TextUnit};

/// An immutable copy of a document at one point in time
///
/// Always holds valid Unicode. The snapshot owns its text, so the document it
/// was taken from can keep changing while the snapshot is analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TextSnapshot {
    text: String,
    scalar_len: usize,
}

impl TextSnapshot {
    /// Create a snapshot from text that is already known to be valid
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let scalar_len = text.chars().count();
        Self { text, scalar_len }
    }

    /// Create a snapshot from UTF-8 bytes
    ///
    /// Fails with [`CoreError::InvalidText`] pointing at the first byte that
    /// is not part of a well-formed sequence.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self> {
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self::new(text)),
            Err(e) => {
                let utf8_error = e.utf8_error();
                let reason = match utf8_error.error_len() {
                    Some(len) => format!("invalid UTF-8 sequence of {len} byte(s)"),
                    None => "truncated UTF-8 sequence at end of input".to_string(),
                };
                Err(CoreError::InvalidText {
                    position: utf8_error.valid_up_to(),
                    unit: TextUnit::Byte,
                    reason,
                })
            }
        }
    }

    /// Create a snapshot from UTF-8 bytes, replacing invalid sequences with U+FFFD
    pub fn from_utf8_lossy(bytes: &[u8]) -> Self {
        Self::new(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Create a snapshot from UTF-16 code units
    ///
    /// Lone surrogates are rejected; the error position is the index of the
    /// offending code unit.
    pub fn from_utf16(units: &[u16]) -> Result<Self> {
        let mut text = String::with_capacity(units.len());
        let mut position = 0;

        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(ch) => {
                    text.push(ch);
                    position += ch.len_utf16();
                }
                Err(e) => {
                    return Err(CoreError::InvalidText {
                        position,
                        unit: TextUnit::CodeUnit,
                        reason: format!("unpaired surrogate {:#06X}", e.unpaired_surrogate()),
                    });
                }
            }
        }

        Ok(Self::new(text))
    }

    /// Create a snapshot from raw scalar values
    pub fn from_scalars(scalars: &[u32]) -> Result<Self> {
        let mut text = String::with_capacity(scalars.len());

        for (position, &value) in scalars.iter().enumerate() {
            let ch = char::from_u32(value).ok_or_else(|| {
                let reason = if (0xD800..=0xDFFF).contains(&value) {
                    format!("surrogate code point U+{value:04X}")
                } else {
                    format!("value {value:#X} is outside the Unicode range")
                };
                CoreError::InvalidText {
                    position,
                    unit: TextUnit::Scalar,
                    reason,
                }
            })?;
            text.push(ch);
        }

        Ok(Self::new(text))
    }

    /// The snapshot text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in UTF-8 bytes
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Length in Unicode scalar values
    pub fn scalar_len(&self) -> usize {
        self.scalar_len
    }

    /// Whether the snapshot contains no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the snapshot and return its text
    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<String> for TextSnapshot {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TextSnapshot {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for TextSnapshot {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
