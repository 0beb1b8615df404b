//! Result values handed to presenters

use serde::{Deserialize, Serialize};
use std::fmt;
use wordtally_core::Locale;

/// Word and grapheme-cluster counts for one snapshot
///
/// Displays in the status-bar form `Words: 2 | Characters: 13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatisticsResult {
    /// Number of word-like word-mode segments
    pub word_count: usize,
    /// Number of grapheme clusters
    pub grapheme_count: usize,
}

impl StatisticsResult {
    /// Create a new result
    pub fn new(word_count: usize, grapheme_count: usize) -> Self {
        Self {
            word_count,
            grapheme_count,
        }
    }
}

impl fmt::Display for StatisticsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Words: {} | Characters: {}",
            self.word_count, self.grapheme_count
        )
    }
}

impl std::ops::Add for StatisticsResult {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            word_count: self.word_count + other.word_count,
            grapheme_count: self.grapheme_count + other.grapheme_count,
        }
    }
}

impl std::iter::Sum for StatisticsResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, stats| acc + stats)
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total scalar values processed
    pub total_scalars: usize,
    /// Number of word-mode segments, word-like or not
    pub word_segments: usize,
    /// Locale whose rules were actually applied
    pub locale_used: Locale,
    /// Whether the requested locale was unsupported and replaced
    pub locale_fallback: bool,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

/// Counts plus metadata from one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// The counts
    pub stats: StatisticsResult,
    /// How they were produced
    pub metadata: AnalysisMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_display() {
        assert_eq!(
            StatisticsResult::new(2, 13).to_string(),
            "Words: 2 | Characters: 13"
        );
    }

    #[test]
    fn test_sum() {
        let total: StatisticsResult = [
            StatisticsResult::new(1, 4),
            StatisticsResult::new(2, 13),
            StatisticsResult::default(),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, StatisticsResult::new(3, 17));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&StatisticsResult::new(2, 13)).unwrap();
        assert_eq!(json, r#"{"word_count":2,"grapheme_count":13}"#);
    }

    #[test]
    fn test_metadata_locale_serializes_as_tag() {
        let metadata = AnalysisMetadata {
            total_bytes: 5,
            total_scalars: 5,
            word_segments: 1,
            locale_used: Locale::new("en_GB"),
            locale_fallback: false,
            processing_time_ms: 0.0,
        };
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["locale_used"], "en-GB");
    }
}
