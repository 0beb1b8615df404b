//! Follow command implementation
//!
//! Treats every line read from stdin as an edit appended to a document and
//! keeps a status line current while the edits arrive.

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliResult;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use wordtally_engine::{
    Generation, LiveStatistics, Locale, StatisticsAggregator, StatisticsResult, StatsUpdate,
    TextSnapshot,
};

/// Longest wait for the count of the final document
const FINAL_UPDATE_TIMEOUT: Duration = Duration::from_secs(30);

/// Arguments for the follow command
#[derive(Debug, Args)]
pub struct FollowArgs {
    /// Locale whose segmentation rules apply
    #[arg(short, long, value_name = "LOCALE", env = "WORDTALLY_LOCALE")]
    pub locale: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Quiet period before recounting, in milliseconds [default: from config]
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FollowArgs {
    /// Execute the follow command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.verbose, false);

        let mut config = CliConfig::load_or_default(self.config.as_deref())?;
        if let Some(ms) = self.debounce_ms {
            config.live.debounce_ms = ms;
        }
        let aggregator = StatisticsAggregator::new(config.stats_config()?);
        let locale = self.locale.as_deref().map(Locale::new).unwrap_or_default();

        let stdin = io::stdin();
        let stdout = io::stdout();
        follow(stdin.lock(), &mut stdout.lock(), aggregator, &locale)
    }
}

/// Feed `reader` line by line to a live worker, writing each delivered
/// status line to `out`
///
/// The last line written is always the count of the complete document.
pub fn follow<R: BufRead, W: Write>(
    mut reader: R,
    out: &mut W,
    aggregator: StatisticsAggregator,
    locale: &Locale,
) -> Result<()> {
    let mut live = LiveStatistics::spawn(aggregator).context("Failed to start statistics worker")?;

    let mut document = String::new();
    let mut printed: Generation = 0;

    loop {
        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .context("Failed to read standard input")?;
        if read == 0 {
            break;
        }

        document.push_str(&line);
        live.submit(TextSnapshot::new(document.clone()), locale.clone())?;

        if let Some(update) = live.try_recv()? {
            printed = write_update(out, update)?;
        }
    }

    let last = live.current_generation();
    if last == 0 {
        writeln!(out, "{}", StatisticsResult::default())?;
    } else if printed < last {
        let update = live
            .wait_for(last, FINAL_UPDATE_TIMEOUT)?
            .ok_or_else(|| anyhow!("Timed out waiting for the final count"))?;
        write_update(out, update)?;
    }

    out.flush()?;
    live.shutdown()?;
    Ok(())
}

fn write_update<W: Write>(out: &mut W, update: StatsUpdate) -> Result<Generation> {
    let stats = update.result?;
    log::debug!("generation {}: {stats}", update.generation);
    writeln!(out, "{stats}")?;
    out.flush()?;
    Ok(update.generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, aggregator: StatisticsAggregator) -> String {
        let mut out = Vec::new();
        follow(Cursor::new(input.as_bytes()), &mut out, aggregator, &Locale::Default).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_final_line_counts_whole_document() {
        let output = run("Hello world\nfoo\n", StatisticsAggregator::default());
        assert_eq!(output.lines().last(), Some("Words: 3 | Characters: 16"));
    }

    #[test]
    fn test_empty_input() {
        let output = run("", StatisticsAggregator::default());
        assert_eq!(output, "Words: 0 | Characters: 0\n");
    }

    #[test]
    fn test_last_line_without_newline() {
        let output = run("one\ntwo three", StatisticsAggregator::default());
        assert_eq!(output.lines().last(), Some("Words: 3 | Characters: 13"));
    }

    #[test]
    fn test_debounced_follow() {
        let config = wordtally_engine::StatsConfig::builder()
            .debounce(Duration::from_millis(50))
            .build()
            .unwrap();
        let output = run("a\nb\nc\n", StatisticsAggregator::new(config));
        assert_eq!(output.lines().last(), Some("Words: 3 | Characters: 6"));
    }
}
