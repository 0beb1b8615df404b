//! Plain text output formatter

use super::{FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use wordtally_engine::{Analysis, StatisticsResult};

/// Plain text formatter - outputs one status line per input
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    total: StatisticsResult,
    inputs: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            total: StatisticsResult::default(),
            inputs: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, source: &str, analysis: &Analysis) -> Result<()> {
        self.total = self.total + analysis.stats;
        self.inputs += 1;

        writeln!(self.writer, "{source}: {}", analysis.stats)?;

        if self.options.include_metadata {
            let meta = &analysis.metadata;
            let fallback = if meta.locale_fallback { " (fallback)" } else { "" };
            writeln!(
                self.writer,
                "  locale: {}{fallback}, bytes: {}, scalars: {}, segments: {}, time: {:.3} ms",
                meta.locale_used,
                meta.total_bytes,
                meta.total_scalars,
                meta.word_segments,
                meta.processing_time_ms
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.options.total {
            writeln!(self.writer, "total ({} inputs): {}", self.inputs, self.total)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::*;

    #[test]
    fn test_lines_and_total() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(
            buffer.clone(),
            FormatOptions {
                total: true,
                ..Default::default()
            },
        );

        formatter.format_result("a.txt", &analyze("Hello, world!")).unwrap();
        formatter.format_result("b.txt", &analyze("cafe\u{301}")).unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            buffer.contents(),
            "a.txt: Words: 2 | Characters: 13\n\
             b.txt: Words: 1 | Characters: 4\n\
             total (2 inputs): Words: 3 | Characters: 17\n"
        );
    }

    #[test]
    fn test_metadata_line() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(
            buffer.clone(),
            FormatOptions {
                include_metadata: true,
                ..Default::default()
            },
        );

        formatter.format_result("<stdin>", &analyze("Hello, world!")).unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        assert!(output.starts_with("<stdin>: Words: 2 | Characters: 13\n"));
        assert!(output.contains("  locale: default, bytes: 13, scalars: 13, segments: 5"));
    }
}
