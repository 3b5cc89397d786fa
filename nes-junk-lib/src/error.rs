use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing split files.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The destination already exists; nothing is overwritten
    #[error("{} already exists", .0.display())]
    ArtifactExists(PathBuf),

    /// Creating or writing a destination failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input path has no file name to derive output names from
    #[error("cannot derive output names from {}", .0.display())]
    NoFileStem(PathBuf),
}

impl SplitError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while loading or rendering `settings.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot render settings: {0}")]
    Serialize(#[source] toml::ser::Error),
}
