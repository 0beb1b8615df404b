//! Text statistics orchestration
//!
//! This crate turns the boundary analyzers of `wordtally-core` into word and
//! grapheme-cluster counts: locale fallback, input handling, configuration,
//! and a background worker for text that is edited while it is measured.
//!
//! # Example
//!
//! ```rust
//! use wordtally_engine::{Locale, StatisticsAggregator, TextSnapshot};
//!
//! let aggregator = StatisticsAggregator::default();
//! let stats = aggregator
//!     .compute(&TextSnapshot::new("Hello, world!"), &Locale::Default)
//!     .unwrap();
//!
//! assert_eq!(stats.word_count, 2);
//! assert_eq!(stats.grapheme_count, 13);
//! assert_eq!(stats.to_string(), "Words: 2 | Characters: 13");
//! ```

#![warn(missing_docs)]

pub mod aggregator;
pub mod config;
pub mod error;
pub mod input;
pub mod live;
pub mod result;

// Re-export key types
pub use aggregator::{ResolvedSegmentation, StatisticsAggregator};
pub use config::{StatsConfig, StatsConfigBuilder, LOCALE_ENV_VARS};
pub use error::{EngineError, Result};
pub use input::Input;
pub use live::{Generation, LiveStatistics, StatsUpdate};
pub use result::{Analysis, AnalysisMetadata, StatisticsResult};

// Re-export from core for convenience
pub use wordtally_core::{
    AnalyzerKind, Boundary, CoreError, Locale, Segment, SegmentClass, Segmentation, TextSnapshot,
};
