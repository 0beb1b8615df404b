//! Reading inputs into text snapshots

use super::InputSource;
use crate::error::CliError;
use anyhow::Result;
use std::io;
use wordtally_engine::{EngineError, Input, TextSnapshot};

/// Input reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a source as a validated snapshot
    ///
    /// With `lossy`, malformed UTF-8 is replaced with U+FFFD instead of
    /// failing.
    pub fn read_snapshot(source: &InputSource, lossy: bool) -> Result<TextSnapshot> {
        let input = match source {
            InputSource::Stdin => Input::from_reader(io::stdin()),
            InputSource::File(path) => Input::from_file(path),
        };

        let snapshot = if lossy {
            input.into_snapshot_lossy()
        } else {
            input.into_snapshot()
        };

        snapshot.map_err(|e| match e {
            e if e.is_invalid_text() => CliError::InvalidText {
                input: source.display_name(),
                message: e.to_string(),
            }
            .into(),
            EngineError::Io(e) => {
                anyhow::Error::new(e).context(format!("Failed to read {}", source.display_name()))
            }
            e => anyhow::Error::new(e),
        })
    }
}
