//! File-level operations on iNES images.
//!
//! Glues the pure parser in `nes-junk-ines` to the filesystem: loading
//! images, hashing their regions, building inspection reports, writing
//! split files and reading user settings.

use std::fs::File;
use std::path::Path;

use nes_junk_core::FormatError;
use nes_junk_ines::Cartridge;

pub mod error;
pub mod hasher;
pub mod report;
pub mod settings;
pub mod writer;

pub use error::{SettingsError, SplitError};
pub use hasher::{CartridgeHashes, RegionHashes, hash_cartridge, hash_parts};
pub use report::{Report, ReportLine, ReportRow, ReportSection, build_report};
pub use settings::{Settings, settings_path};
pub use writer::{WrittenArtifact, artifact_path, write_artifacts};

/// Open `path` and parse it as an iNES image.
///
/// The file handle is closed before this returns, even on error.
pub fn load_cartridge(path: &Path) -> Result<Cartridge, FormatError> {
    let mut file = File::open(path)?;
    let cart = Cartridge::read(&mut file)?;
    log::debug!(
        "loaded {} ({} variant, mapper {})",
        path.display(),
        cart.variant(),
        cart.mapper()
    );
    Ok(cart)
}
