//! Boundaries, segments and the output of an analyzer

use serde::{Deserialize, Serialize};

/// A position between two scalar values where a segment starts or ends
///
/// `char_offset` counts Unicode scalar values and is the canonical offset.
/// `byte_offset` is the same position in the UTF-8 text, for slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Boundary {
    /// Offset in scalar values
    pub char_offset: usize,
    /// Offset in UTF-8 bytes
    pub byte_offset: usize,
}

impl Boundary {
    /// The boundary at the start of every text
    pub const START: Boundary = Boundary {
        char_offset: 0,
        byte_offset: 0,
    };

    /// Create a new boundary
    pub fn new(char_offset: usize, byte_offset: usize) -> Self {
        Self {
            char_offset,
            byte_offset,
        }
    }
}

/// Classification of a word-mode segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentClass {
    /// Letters, numbers, kana or ideographs
    WordLike,
    /// Whitespace, punctuation, symbols or controls
    NonWord,
}

impl SegmentClass {
    /// Whether segments of this class count as words
    pub fn is_word_like(self) -> bool {
        matches!(self, SegmentClass::WordLike)
    }

    pub(crate) fn from_word_like(word_like: bool) -> Self {
        if word_like {
            SegmentClass::WordLike
        } else {
            SegmentClass::NonWord
        }
    }
}

/// Span of text between two adjacent boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Boundary where the segment starts
    pub start: Boundary,
    /// Boundary where the segment ends
    pub end: Boundary,
    /// Word-mode classification, `None` for grapheme clusters
    pub class: Option<SegmentClass>,
}

impl Segment {
    /// Length in scalar values
    pub fn len(&self) -> usize {
        self.end.char_offset - self.start.char_offset
    }

    /// Whether the segment covers no scalar values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The text covered by this segment
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start.byte_offset..self.end.byte_offset]
    }

    /// Whether this is a word-like word-mode segment
    pub fn is_word_like(&self) -> bool {
        self.class.is_some_and(SegmentClass::is_word_like)
    }
}

/// Result of running an analyzer over a snapshot
///
/// Holds the full boundary sequence, starting at 0 and ending at the length
/// of the snapshot, and for word mode one class per segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    boundaries: Vec<Boundary>,
    classes: Option<Vec<SegmentClass>>,
}

impl Segmentation {
    /// Build a segmentation from a boundary sequence
    ///
    /// `classes`, when present, must hold exactly one entry per segment.
    pub(crate) fn new(boundaries: Vec<Boundary>, classes: Option<Vec<SegmentClass>>) -> Self {
        debug_assert_eq!(boundaries.first(), Some(&Boundary::START));
        debug_assert!(boundaries
            .windows(2)
            .all(|w| w[0].char_offset < w[1].char_offset && w[0].byte_offset < w[1].byte_offset));
        debug_assert!(classes
            .as_ref()
            .map_or(true, |c| c.len() + 1 == boundaries.len()));

        Self {
            boundaries,
            classes,
        }
    }

    /// All boundaries, in order
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Scalar-value offsets of all boundaries
    pub fn offsets(&self) -> Vec<usize> {
        self.boundaries.iter().map(|b| b.char_offset).collect()
    }

    /// Per-segment classes (word mode only)
    pub fn classes(&self) -> Option<&[SegmentClass]> {
        self.classes.as_deref()
    }

    /// Number of segments
    pub fn segment_count(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    /// Number of segments classified as word-like
    pub fn word_like_count(&self) -> usize {
        self.classes
            .as_ref()
            .map_or(0, |classes| classes.iter().filter(|c| c.is_word_like()).count())
    }

    /// Iterate over the segments
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.boundaries
            .windows(2)
            .enumerate()
            .map(move |(index, pair)| Segment {
                start: pair[0],
                end: pair[1],
                class: self.classes.as_ref().map(|classes| classes[index]),
            })
    }

    /// The final boundary, equal to the snapshot length
    pub fn end(&self) -> Boundary {
        self.boundaries.last().copied().unwrap_or(Boundary::START)
    }
}
