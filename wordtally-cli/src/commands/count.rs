//! Count command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader, InputSource};
use crate::output::{create_formatter, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordtally_engine::{Analysis, Locale, StatisticsAggregator};

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input files or patterns (supports glob); `-` or none reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: from config, otherwise text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Locale whose segmentation rules apply (BCP 47, e.g. en-US, ja, th)
    #[arg(short, long, value_name = "LOCALE", env = "WORDTALLY_LOCALE")]
    pub locale: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Replace malformed UTF-8 with U+FFFD instead of failing
    #[arg(long)]
    pub lossy: bool,

    /// Append a grand total over all inputs
    #[arg(long)]
    pub total: bool,

    /// Include processing metadata in the output
    #[arg(short, long)]
    pub metadata: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = self.output_format(&config)?;
        let aggregator = StatisticsAggregator::new(config.stats_config()?);
        let locale = self.locale.as_deref().map(Locale::new).unwrap_or_default();

        let sources = resolve_patterns(&self.input)?;
        let threads = config.worker_threads();
        log::info!(
            "Counting {} input(s) with locale {locale} on {threads} thread(s)",
            sources.len()
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64)?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker threads")?;

        let results: Vec<Result<Analysis>> = pool.install(|| {
            sources
                .par_iter()
                .map(|source| {
                    let result = self.count_one(&aggregator, source, &locale);
                    progress.file_completed(&source.display_name());
                    result
                })
                .collect()
        });
        progress.finish();

        // Nothing is printed unless every input was counted
        let analyses = results.into_iter().collect::<Result<Vec<_>>>()?;

        let options = FormatOptions {
            include_metadata: self.metadata || config.output.include_metadata,
            total: self.total,
            pretty_json: config.output.pretty_json,
        };
        let mut formatter = create_formatter(format, self.open_output()?, options);
        for (source, analysis) in sources.iter().zip(&analyses) {
            formatter.format_result(&source.display_name(), analysis)?;
        }
        formatter.finish()?;

        if let Some(path) = &self.output {
            log::info!("Wrote results to {}", path.display());
        }
        Ok(())
    }

    fn count_one(
        &self,
        aggregator: &StatisticsAggregator,
        source: &InputSource,
        locale: &Locale,
    ) -> Result<Analysis> {
        let snapshot = FileReader::read_snapshot(source, self.lossy)?;
        let analysis = aggregator
            .analyze(&snapshot, locale)
            .with_context(|| format!("Failed to count {source}"))?;

        if analysis.metadata.locale_fallback {
            log::info!(
                "{source}: locale {locale} not supported, used {}",
                analysis.metadata.locale_used
            );
        }
        Ok(analysis)
    }

    /// The `--format` flag, else the configured default
    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        let name = &config.output.default_format;
        OutputFormat::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}
