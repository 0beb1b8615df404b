//! Statistics configuration
//!
//! The default locale lives here, in a value the caller owns and passes to
//! the aggregator, instead of in process-global state.

use crate::error::{EngineError, Result};
use std::time::Duration;
use wordtally_core::Locale;

/// Environment variables consulted for the system locale, in priority order
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Configuration for a [`StatisticsAggregator`](crate::StatisticsAggregator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    /// Locale used for [`Locale::Default`] and as the fallback for
    /// unsupported locales
    pub default_locale: Locale,
    /// Quiet period the background worker waits for further edits before
    /// recomputing; zero recomputes as soon as the worker is free
    pub debounce: Duration,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::Default,
            debounce: Duration::ZERO,
        }
    }
}

impl StatsConfig {
    /// Create a configuration with the given default locale
    pub fn new(default_locale: impl Into<Locale>) -> Self {
        Self {
            default_locale: default_locale.into(),
            ..Default::default()
        }
    }

    /// Use the system locale from `LC_ALL`, `LC_CTYPE` or `LANG`
    ///
    /// An unparseable system locale is ignored and the language-invariant
    /// rules are used instead.
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Like [`StatsConfig::from_env`] with a custom variable lookup
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = LOCALE_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .map(|value| Locale::new(&value))
            .unwrap_or_default();

        match locale.validate() {
            Ok(()) => Self::new(locale),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring system locale");
                Self::default()
            }
        }
    }

    /// Create a builder
    pub fn builder() -> StatsConfigBuilder {
        StatsConfigBuilder::default()
    }
}

/// Builder for [`StatsConfig`]
#[derive(Debug, Default)]
pub struct StatsConfigBuilder {
    config: StatsConfig,
}

impl StatsConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default locale
    pub fn default_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.config.default_locale = locale.into();
        self
    }

    /// Set the background worker debounce period
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.config.debounce = debounce;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<StatsConfig> {
        self.config
            .default_locale
            .validate()
            .map_err(|e| EngineError::Config(format!("default locale: {e}")))?;

        Ok(self.config)
    }
}
