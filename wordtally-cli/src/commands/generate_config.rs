//! Generate config command implementation

use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Commented configuration template with every setting at its default
pub const CONFIG_TEMPLATE: &str = r#"# wordtally configuration
#
# Every setting is optional. Command-line flags take precedence.

[segmentation]
# Locale used when no --locale is given (BCP 47, e.g. "en-US", "ja", "th").
# When unset, the system locale from LC_ALL, LC_CTYPE or LANG is used.
# Unsupported locales fall back to the language-independent rules.
# default_locale = "en"

[output]
# Output format for `count`: "text", "json" or "markdown"
default_format = "text"

# Include locale, byte and timing metadata with each result
include_metadata = false

# Pretty print JSON output
pretty_json = true

[performance]
# Number of threads used to count multiple files (0 = one per CPU)
worker_threads = 0

[live]
# Quiet period before `follow` recounts after an edit, in milliseconds
debounce_ms = 0
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!(
            "✓ Configuration template written to {}",
            self.output.display()
        );
        println!();
        println!("Use it with:");
        println!(
            "   wordtally count -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}
