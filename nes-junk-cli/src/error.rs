use std::path::Path;

use nes_junk_core::FormatError;
use nes_junk_lib::{SettingsError, SplitError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Writing command output failed
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The input could not be read or is not a usable iNES image
    #[error("{path}: {source}")]
    Format {
        path: String,
        #[source]
        source: FormatError,
    },

    /// Writing split files failed
    #[error(transparent)]
    Split(#[from] SplitError),

    /// Settings file could not be loaded
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),
}

impl CliError {
    pub(crate) fn format(path: &Path, source: FormatError) -> Self {
        Self::Format {
            path: path.display().to_string(),
            source,
        }
    }
}
