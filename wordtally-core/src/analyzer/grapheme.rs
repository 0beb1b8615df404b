//! Grapheme-cluster analysis (UAX #29 extended grapheme clusters)

use super::{AnalyzerKind, BoundaryAnalyzer, BoundaryCollector};
use crate::boundary::Segmentation;
use crate::error::Result;
use crate::locale::Locale;
use crate::snapshot::TextSnapshot;
use icu_segmenter::GraphemeClusterSegmenter;

/// Grapheme-mode analyzer
///
/// Each segment is one user-perceived character: a base with its combining
/// marks, a ZWJ emoji sequence, a regional-indicator pair, a Hangul syllable
/// or an Indic conjunct. Cluster rules do not vary by locale, but the locale
/// is still validated so both analyzers fail the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphemeAnalyzer;

impl GraphemeAnalyzer {
    /// Create a new grapheme analyzer
    pub fn new() -> Self {
        Self
    }
}

impl BoundaryAnalyzer for GraphemeAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Grapheme
    }

    fn segment(&self, snapshot: &TextSnapshot, locale: &Locale) -> Result<Segmentation> {
        locale.validate()?;

        let text = snapshot.as_str();
        let mut collector = BoundaryCollector::new(text);
        for byte_offset in GraphemeClusterSegmenter::new().segment_str(text) {
            collector.push(byte_offset);
        }
        collector.push(text.len());

        Ok(Segmentation::new(collector.into_boundaries(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn count(text: &str) -> usize {
        GraphemeAnalyzer::new()
            .segment(&TextSnapshot::new(text), &Locale::Default)
            .unwrap()
            .segment_count()
    }

    #[test]
    fn test_ascii() {
        assert_eq!(count("Hello, world!"), 13);
    }

    #[test]
    fn test_combining_mark() {
        assert_eq!(count("cafe\u{301}"), 4);
    }

    #[test]
    fn test_zwj_family() {
        // man, ZWJ, woman, ZWJ, girl, ZWJ, boy
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        assert_eq!(family.chars().count(), 7);
        assert_eq!(count(family), 1);
    }

    #[test]
    fn test_regional_indicators() {
        // Two flags: JP, FR
        assert_eq!(count("\u{1F1EF}\u{1F1F5}\u{1F1EB}\u{1F1F7}"), 2);
    }

    #[test]
    fn test_hangul_jamo() {
        // Decomposed 한 (L V T) is one cluster
        assert_eq!(count("\u{1112}\u{1161}\u{11AB}"), 1);
    }

    #[test]
    fn test_crlf_is_one_cluster() {
        assert_eq!(count("a\r\nb"), 3);
    }

    #[test]
    fn test_empty_text() {
        let segmentation = GraphemeAnalyzer::new()
            .segment(&TextSnapshot::default(), &Locale::Default)
            .unwrap();
        assert_eq!(segmentation.offsets(), vec![0]);
        assert!(segmentation.classes().is_none());
    }

    #[test]
    fn test_unsupported_locale() {
        let err = GraphemeAnalyzer::new()
            .segment(&TextSnapshot::new("x"), &Locale::new("!!"))
            .unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedLocale { .. }));
    }
}
