//! Markdown output formatter

use super::{FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use wordtally_engine::{Analysis, StatisticsResult};

/// Markdown formatter - outputs results as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    total: StatisticsResult,
    header_written: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            total: StatisticsResult::default(),
            header_written: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if self.options.include_metadata {
            writeln!(self.writer, "| Source | Words | Characters | Locale | Bytes |")?;
            writeln!(self.writer, "|---|---:|---:|---|---:|")?;
        } else {
            writeln!(self.writer, "| Source | Words | Characters |")?;
            writeln!(self.writer, "|---|---:|---:|")?;
        }
        self.header_written = true;
        Ok(())
    }
}

/// Escape characters that would break a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, source: &str, analysis: &Analysis) -> Result<()> {
        if !self.header_written {
            self.write_header()?;
        }
        self.total = self.total + analysis.stats;

        let stats = analysis.stats;
        if self.options.include_metadata {
            let meta = &analysis.metadata;
            writeln!(
                self.writer,
                "| {} | {} | {} | {}{} | {} |",
                escape_cell(source),
                stats.word_count,
                stats.grapheme_count,
                meta.locale_used,
                if meta.locale_fallback { " (fallback)" } else { "" },
                meta.total_bytes
            )?;
        } else {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                escape_cell(source),
                stats.word_count,
                stats.grapheme_count
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.options.total {
            writeln!(self.writer)?;
            writeln!(self.writer, "---")?;
            writeln!(
                self.writer,
                "*Total: {} words, {} characters*",
                self.total.word_count, self.total.grapheme_count
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
