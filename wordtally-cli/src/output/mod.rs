//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use wordtally_engine::{Analysis, AnalysisMetadata, StatisticsResult};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the counts for one input
    fn format_result(&mut self, source: &str, analysis: &Analysis) -> Result<()>;

    /// Finalize output (e.g., close JSON document, print totals)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One status line per input
    Text,
    /// JSON document with per-input results
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Format name as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "Status line per input: Words: N | Characters: M",
            OutputFormat::Json => "JSON document with per-input counts and optional metadata",
            OutputFormat::Markdown => "Markdown table with one row per input",
        }
    }
}

/// Options shared by all formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Emit processing metadata next to the counts
    pub include_metadata: bool,
    /// Append a grand total over all inputs
    pub total: bool,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

/// Create the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    options: FormatOptions,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options)),
    }
}

/// Per-input record shared by the structured formatters
#[derive(Debug, Clone, Serialize)]
pub struct ResultRecord {
    /// Input display name
    pub source: String,
    /// Counts
    #[serde(flatten)]
    pub stats: StatisticsResult,
    /// Processing metadata, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnalysisMetadata>,
}

impl ResultRecord {
    fn new(source: &str, analysis: &Analysis, options: FormatOptions) -> Self {
        Self {
            source: source.to_string(),
            stats: analysis.stats,
            metadata: options.include_metadata.then(|| analysis.metadata.clone()),
        }
    }
}
