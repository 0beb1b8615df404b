//! Configuration module
//!
//! Settings are read from a TOML file given with `--config`. Every section
//! and key is optional; command-line flags override file values.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use wordtally_engine::{Locale, StatsConfig};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Live recomputation configuration
    #[serde(default)]
    pub live: LiveConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct SegmentationConfig {
    /// Locale used when none is requested; unset means the system locale
    pub default_locale: Option<String>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include metadata in output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_metadata: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

/// Settings for `follow`
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LiveConfig {
    /// Quiet period before recomputing, in milliseconds
    pub debounce_ms: u64,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the file if one was given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Build the engine configuration
    ///
    /// Without a configured default locale the system locale is used.
    pub fn stats_config(&self) -> Result<StatsConfig> {
        let default_locale = match &self.segmentation.default_locale {
            Some(tag) => Locale::new(tag),
            None => StatsConfig::from_env().default_locale,
        };

        StatsConfig::builder()
            .default_locale(default_locale)
            .debounce(Duration::from_millis(self.live.debounce_ms))
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Thread count for parallel counting
    pub fn worker_threads(&self) -> usize {
        match self.performance.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
