//! JSON output formatter

use super::{FormatOptions, OutputFormatter, ResultRecord};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use wordtally_engine::{Analysis, StatisticsResult};

/// JSON formatter - outputs all results as one document
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    results: Vec<ResultRecord>,
}

/// Top-level JSON document
#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    /// Per-input results, in input order
    pub results: &'a [ResultRecord],
    /// Grand total, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<StatisticsResult>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            results: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, analysis: &Analysis) -> Result<()> {
        self.results
            .push(ResultRecord::new(source, analysis, self.options));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = JsonDocument {
            results: &self.results,
            total: self
                .options
                .total
                .then(|| self.results.iter().map(|r| r.stats).sum()),
        };

        if self.options.pretty_json {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
