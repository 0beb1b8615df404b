//! Segments command implementation
//!
//! Prints one line per segment: start and end scalar offsets, the segment
//! class, and the segment text as an escaped string.

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input::{FileReader, InputSource, STDIN_PATTERN};
use anyhow::Context;
use clap::Args;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordtally_engine::{AnalyzerKind, Locale, Segment, SegmentClass, StatisticsAggregator};

/// Arguments for the segments command
#[derive(Debug, Args)]
pub struct SegmentsArgs {
    /// Input file; `-` or none reads stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Segmentation mode
    #[arg(short, long, value_enum, default_value = "word")]
    pub mode: SegmentMode,

    /// Locale whose segmentation rules apply
    #[arg(short, long, value_name = "LOCALE", env = "WORDTALLY_LOCALE")]
    pub locale: Option<String>,

    /// Only print word-like segments (word mode)
    #[arg(short, long)]
    pub words_only: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Replace malformed UTF-8 with U+FFFD instead of failing
    #[arg(long)]
    pub lossy: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Which boundaries to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SegmentMode {
    /// Word-mode segments with their word-like classification
    Word,
    /// Grapheme clusters
    Grapheme,
}

impl From<SegmentMode> for AnalyzerKind {
    fn from(mode: SegmentMode) -> Self {
        match mode {
            SegmentMode::Word => AnalyzerKind::Word,
            SegmentMode::Grapheme => AnalyzerKind::Grapheme,
        }
    }
}

impl SegmentsArgs {
    /// Execute the segments command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.verbose, false);

        if self.words_only && self.mode == SegmentMode::Grapheme {
            anyhow::bail!("--words-only requires --mode word");
        }

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let aggregator = StatisticsAggregator::new(config.stats_config()?);
        let locale = self.locale.as_deref().map(Locale::new).unwrap_or_default();

        let source = self.source();
        let snapshot = FileReader::read_snapshot(&source, self.lossy)?;
        let resolved = aggregator
            .segmentation(self.mode.into(), &snapshot, &locale)
            .with_context(|| format!("Failed to segment {source}"))?;

        log::info!(
            "{source}: {} segment(s) using locale {}{}",
            resolved.segmentation.segment_count(),
            resolved.locale,
            if resolved.fallback { " (fallback)" } else { "" }
        );

        let mut out = BufWriter::new(io::stdout().lock());
        for segment in resolved.segmentation.segments() {
            if self.words_only && !segment.is_word_like() {
                continue;
            }
            writeln!(out, "{}", format_segment(&segment, snapshot.as_str()))?;
        }
        out.flush()?;
        Ok(())
    }

    fn source(&self) -> InputSource {
        match &self.input {
            Some(path) if path.as_os_str() != STDIN_PATTERN => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }
}

/// Render one segment as a tab-separated line
pub fn format_segment(segment: &Segment, text: &str) -> String {
    let class = match segment.class {
        Some(SegmentClass::WordLike) => "word",
        Some(SegmentClass::NonWord) => "other",
        None => "grapheme",
    };
    format!(
        "{}\t{}\t{class}\t{:?}",
        segment.start.char_offset,
        segment.end.char_offset,
        segment.text(text)
    )
}
