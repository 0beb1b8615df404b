//! Boundary analyzers
//!
//! Word mode and grapheme mode share one contract, [`BoundaryAnalyzer`]:
//! given a snapshot and a locale, return the complete boundary sequence of
//! the snapshot. Both are pure functions of their inputs.

use crate::boundary::{Boundary, Segmentation};
use crate::error::Result;
use crate::locale::Locale;
use crate::snapshot::TextSnapshot;
use std::fmt;

pub mod grapheme;
pub mod word;

pub use grapheme::GraphemeAnalyzer;
pub use word::WordAnalyzer;

/// Which segmentation rules an analyzer applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerKind {
    /// UAX #29 word boundaries
    Word,
    /// UAX #29 extended grapheme clusters
    Grapheme,
}

impl AnalyzerKind {
    /// Create the analyzer for this kind
    pub fn analyzer(self) -> Box<dyn BoundaryAnalyzer> {
        match self {
            AnalyzerKind::Word => Box::new(WordAnalyzer::new()),
            AnalyzerKind::Grapheme => Box::new(GraphemeAnalyzer::new()),
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerKind::Word => write!(f, "word"),
            AnalyzerKind::Grapheme => write!(f, "grapheme"),
        }
    }
}

/// Splits a snapshot into segments
pub trait BoundaryAnalyzer: Send + Sync {
    /// The rule set this analyzer applies
    fn kind(&self) -> AnalyzerKind;

    /// Compute the boundary sequence of `snapshot`
    ///
    /// The result always starts at offset 0 and ends at the snapshot length.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedLocale`](crate::CoreError::UnsupportedLocale)
    /// when no rules are available for `locale`. [`Locale::Default`] always
    /// succeeds and selects the language-invariant rules.
    fn segment(&self, snapshot: &TextSnapshot, locale: &Locale) -> Result<Segmentation>;
}

/// Turns the byte offsets reported by a segmenter into [`Boundary`] values
///
/// Keeps a running scalar-value count so each conversion only scans the text
/// between the previous boundary and the new one.
pub(crate) struct BoundaryCollector<'a> {
    text: &'a str,
    boundaries: Vec<Boundary>,
}

impl<'a> BoundaryCollector<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            boundaries: vec![Boundary::START],
        }
    }

    /// Record a boundary; returns `false` when it does not start a new segment
    pub(crate) fn push(&mut self, byte_offset: usize) -> bool {
        let last = self.last();
        if byte_offset <= last.byte_offset || byte_offset > self.text.len() {
            return false;
        }

        let chars = self.text[last.byte_offset..byte_offset].chars().count();
        self.boundaries
            .push(Boundary::new(last.char_offset + chars, byte_offset));
        true
    }

    pub(crate) fn last(&self) -> Boundary {
        self.boundaries.last().copied().unwrap_or(Boundary::START)
    }

    /// Whether the collected boundaries reach the end of the text
    pub(crate) fn is_complete(&self) -> bool {
        self.last().byte_offset == self.text.len()
    }

    pub(crate) fn into_boundaries(self) -> Vec<Boundary> {
        self.boundaries
    }
}
