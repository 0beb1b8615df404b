//! Unicode word and grapheme-cluster boundary analysis
//!
//! This crate holds the pure domain layer of wordtally: validated text
//! snapshots, locales, and the two boundary analyzers that split a snapshot
//! into word-mode segments (each classified as word-like or not) and into
//! grapheme clusters.
//!
//! # Example
//!
//! ```rust
//! use wordtally_core::{BoundaryAnalyzer, GraphemeAnalyzer, Locale, TextSnapshot, WordAnalyzer};
//!
//! let snapshot = TextSnapshot::new("Hello, world!");
//!
//! let words = WordAnalyzer::new().segment(&snapshot, &Locale::Default).unwrap();
//! assert_eq!(words.word_like_count(), 2);
//!
//! let graphemes = GraphemeAnalyzer::new().segment(&snapshot, &Locale::Default).unwrap();
//! assert_eq!(graphemes.segment_count(), 13);
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod boundary;
pub mod error;
pub mod locale;
pub mod snapshot;

// Re-export key types
pub use analyzer::{AnalyzerKind, BoundaryAnalyzer, GraphemeAnalyzer, WordAnalyzer};
pub use boundary::{Boundary, Segment, SegmentClass, Segmentation};
pub use error::{CoreError, Result, TextUnit};
pub use locale::Locale;
pub use snapshot::TextSnapshot;
