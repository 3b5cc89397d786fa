//! User settings (`~/.config/nes-junk/settings.toml`).
//!
//! The file is optional. Every key has a default, so a partial file only
//! overrides what it mentions.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use nes_junk_core::HashAlgorithm;

use crate::error::SettingsError;

/// Canonical path to the settings file: `~/.config/nes-junk/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("nes-junk").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub split: SplitSettings,
    pub check: CheckSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitSettings {
    /// Where split files go; next to the input when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSettings {
    /// Digests shown by `check`, in this order. Empty hides the hash block.
    pub hashes: Vec<HashAlgorithm>,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            hashes: HashAlgorithm::all().to_vec(),
        }
    }
}

impl Settings {
    /// Load from the canonical path.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render the effective settings as TOML for display.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(SettingsError::Serialize)
    }

    /// Resolve the split output directory: CLI override, then settings,
    /// then `None` (the input's directory).
    pub fn resolve_output_dir(&self, cli_override: Option<PathBuf>) -> Option<PathBuf> {
        cli_override.or_else(|| self.split.output_dir.clone())
    }

    /// Resolve the digests `check` shows: CLI override, then settings.
    pub fn resolve_hashes(&self, cli_override: Option<Vec<HashAlgorithm>>) -> Vec<HashAlgorithm> {
        cli_override.unwrap_or_else(|| self.check.hashes.clone())
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
