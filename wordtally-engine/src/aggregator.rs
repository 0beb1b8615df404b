//! Statistics aggregation
//!
//! Drives both analyzers over one snapshot and reduces their boundary
//! sequences to a [`StatisticsResult`]. Unsupported locales are recovered
//! here and never reach the caller.

use crate::config::StatsConfig;
use crate::error::Result;
use crate::result::{Analysis, AnalysisMetadata, StatisticsResult};
use std::time::Instant;
use wordtally_core::{
    AnalyzerKind, BoundaryAnalyzer, CoreError, GraphemeAnalyzer, Locale, Segmentation,
    TextSnapshot, WordAnalyzer,
};

/// A segmentation together with the locale that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSegmentation {
    /// The boundaries (and classes, in word mode)
    pub segmentation: Segmentation,
    /// Locale whose rules were applied
    pub locale: Locale,
    /// Whether the requested locale had to be replaced
    pub fallback: bool,
}

/// Computes word and grapheme-cluster counts
///
/// Holds no per-call state, so one instance can be shared between threads
/// and used for any number of concurrent computations.
#[derive(Debug, Clone, Default)]
pub struct StatisticsAggregator {
    config: StatsConfig,
    word: WordAnalyzer,
    grapheme: GraphemeAnalyzer,
}

impl StatisticsAggregator {
    /// Create an aggregator with the given configuration
    pub fn new(config: StatsConfig) -> Self {
        Self {
            config,
            word: WordAnalyzer::new(),
            grapheme: GraphemeAnalyzer::new(),
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Compute both counts for `snapshot`
    ///
    /// [`Locale::Default`] selects the configured default locale. An
    /// unsupported `locale` silently falls back to the default.
    pub fn compute(&self, snapshot: &TextSnapshot, locale: &Locale) -> Result<StatisticsResult> {
        Ok(self.analyze(snapshot, locale)?.stats)
    }

    /// Compute counts for text that is already a `&str`
    pub fn compute_text(&self, text: &str, locale: &Locale) -> Result<StatisticsResult> {
        self.compute(&TextSnapshot::new(text), locale)
    }

    /// Validate UTF-8 bytes and compute their counts
    ///
    /// # Errors
    ///
    /// Fails with [`CoreError::InvalidText`] when `bytes` is not valid UTF-8.
    pub fn compute_utf8(&self, bytes: Vec<u8>, locale: &Locale) -> Result<StatisticsResult> {
        let snapshot = TextSnapshot::from_utf8(bytes)?;
        self.compute(&snapshot, locale)
    }

    /// Validate UTF-16 code units and compute their counts
    ///
    /// # Errors
    ///
    /// Fails with [`CoreError::InvalidText`] on an unpaired surrogate.
    pub fn compute_utf16(&self, units: &[u16], locale: &Locale) -> Result<StatisticsResult> {
        let snapshot = TextSnapshot::from_utf16(units)?;
        self.compute(&snapshot, locale)
    }

    /// Compute both counts and report how they were produced
    pub fn analyze(&self, snapshot: &TextSnapshot, locale: &Locale) -> Result<Analysis> {
        let start = Instant::now();

        let words = self.resolve(&self.word, snapshot, locale)?;
        let graphemes = self.resolve(&self.grapheme, snapshot, &words.locale)?;

        let stats = StatisticsResult {
            word_count: words.segmentation.word_like_count(),
            grapheme_count: graphemes.segmentation.segment_count(),
        };

        tracing::debug!(
            bytes = snapshot.byte_len(),
            words = stats.word_count,
            graphemes = stats.grapheme_count,
            locale = %words.locale,
            "computed statistics"
        );

        Ok(Analysis {
            stats,
            metadata: AnalysisMetadata {
                total_bytes: snapshot.byte_len(),
                total_scalars: snapshot.scalar_len(),
                word_segments: words.segmentation.segment_count(),
                locale_used: words.locale,
                locale_fallback: words.fallback || graphemes.fallback,
                processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            },
        })
    }

    /// Run one analyzer with the same locale fallback `compute` uses
    pub fn segmentation(
        &self,
        kind: AnalyzerKind,
        snapshot: &TextSnapshot,
        locale: &Locale,
    ) -> Result<ResolvedSegmentation> {
        match kind {
            AnalyzerKind::Word => self.resolve(&self.word, snapshot, locale),
            AnalyzerKind::Grapheme => self.resolve(&self.grapheme, snapshot, locale),
        }
    }

    /// Try the requested locale, then the configured default, then the
    /// language-invariant rules
    fn resolve<A>(
        &self,
        analyzer: &A,
        snapshot: &TextSnapshot,
        locale: &Locale,
    ) -> Result<ResolvedSegmentation>
    where
        A: BoundaryAnalyzer + ?Sized,
    {
        let requested = locale.or(&self.config.default_locale);
        let mut candidates = vec![requested.clone()];
        if self.config.default_locale != requested {
            candidates.push(self.config.default_locale.clone());
        }
        if !requested.is_default() {
            candidates.push(Locale::Default);
        }
        candidates.dedup();

        for (attempt, candidate) in candidates.into_iter().enumerate() {
            match analyzer.segment(snapshot, &candidate) {
                Ok(segmentation) => {
                    return Ok(ResolvedSegmentation {
                        segmentation,
                        locale: candidate,
                        fallback: attempt > 0,
                    });
                }
                Err(e @ CoreError::UnsupportedLocale { .. }) => {
                    tracing::warn!(
                        analyzer = %analyzer.kind(),
                        error = %e,
                        "falling back to default locale"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        // Locale::Default is always supported and is the last candidate
        let segmentation = analyzer.segment(snapshot, &Locale::Default)?;
        Ok(ResolvedSegmentation {
            segmentation,
            locale: Locale::Default,
            fallback: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(text: &str) -> StatisticsResult {
        StatisticsAggregator::default()
            .compute(&TextSnapshot::new(text), &Locale::Default)
            .unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(compute(""), StatisticsResult::new(0, 0));
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(compute("Hello, world!"), StatisticsResult::new(2, 13));
    }

    #[test]
    fn test_combining_acute() {
        assert_eq!(compute("cafe\u{301}"), StatisticsResult::new(1, 4));
    }

    #[test]
    fn test_zwj_family_is_one_grapheme() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        assert_eq!(compute(family).grapheme_count, 1);
    }

    #[test]
    fn test_spaces_only() {
        assert_eq!(compute("   "), StatisticsResult::new(0, 3));
    }

    #[test]
    fn test_unsupported_locale_matches_default() {
        let aggregator = StatisticsAggregator::default();
        let snapshot = TextSnapshot::new("Hello, world! 日本語のテキスト");

        let fallback = aggregator
            .analyze(&snapshot, &Locale::new("!!bogus!!"))
            .unwrap();
        let default = aggregator.analyze(&snapshot, &Locale::new("default")).unwrap();

        assert_eq!(fallback.stats, default.stats);
        assert!(fallback.metadata.locale_fallback);
        assert!(!default.metadata.locale_fallback);
        assert_eq!(fallback.metadata.locale_used, Locale::Default);
    }

    #[test]
    fn test_default_resolves_to_configured_locale() {
        let aggregator = StatisticsAggregator::new(StatsConfig::new("en-GB"));
        let analysis = aggregator
            .analyze(&TextSnapshot::new("colour"), &Locale::Default)
            .unwrap();
        assert_eq!(analysis.metadata.locale_used, Locale::new("en-GB"));
        assert!(!analysis.metadata.locale_fallback);
    }

    #[test]
    fn test_unsupported_locale_falls_back_to_configured_default() {
        let aggregator = StatisticsAggregator::new(StatsConfig::new("fr"));
        let analysis = aggregator
            .analyze(&TextSnapshot::new("Bonjour le monde"), &Locale::new("$$"))
            .unwrap();
        assert_eq!(analysis.stats.word_count, 3);
        assert_eq!(analysis.metadata.locale_used, Locale::new("fr"));
        assert!(analysis.metadata.locale_fallback);
    }

    #[test]
    fn test_unusable_configured_default() {
        // Bypasses the builder, which would reject this locale
        let aggregator = StatisticsAggregator::new(StatsConfig::new("?? nope"));
        let analysis = aggregator
            .analyze(&TextSnapshot::new("still counted"), &Locale::Default)
            .unwrap();
        assert_eq!(analysis.stats, StatisticsResult::new(2, 13));
        assert_eq!(analysis.metadata.locale_used, Locale::Default);
    }

    #[test]
    fn test_invalid_utf8_propagates() {
        let err = StatisticsAggregator::default()
            .compute_utf8(vec![b'o', b'k', 0xC3], &Locale::Default)
            .unwrap_err();
        assert!(err.is_invalid_text());
    }

    #[test]
    fn test_invalid_utf16_propagates() {
        let err = StatisticsAggregator::default()
            .compute_utf16(&[0x0041, 0xDFFF], &Locale::Default)
            .unwrap_err();
        assert!(err.is_invalid_text());
    }

    #[test]
    fn test_metadata() {
        let analysis = StatisticsAggregator::default()
            .analyze(&TextSnapshot::new("Hello, world!"), &Locale::Default)
            .unwrap();
        assert_eq!(analysis.metadata.total_bytes, 13);
        assert_eq!(analysis.metadata.total_scalars, 13);
        assert_eq!(analysis.metadata.word_segments, 5);
        assert!(analysis.metadata.processing_time_ms >= 0.0);
    }

    #[test]
    fn test_segmentation_with_fallback() {
        let resolved = StatisticsAggregator::default()
            .segmentation(
                AnalyzerKind::Grapheme,
                &TextSnapshot::new("ab"),
                &Locale::new("%%x"),
            )
            .unwrap();
        assert_eq!(resolved.segmentation.segment_count(), 2);
        assert!(resolved.fallback);
    }
}
