pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod split;

use std::path::Path;

use nes_junk_ines::Cartridge;

use crate::error::CliError;

/// Load `path`, attaching the path to any parse failure.
pub(crate) fn load(path: &Path) -> Result<Cartridge, CliError> {
    nes_junk_lib::load_cartridge(path).map_err(|e| CliError::format(path, e))
}

/// Log the non-fatal problems found while parsing.
pub(crate) fn log_warnings(path: &Path, cart: &Cartridge) {
    for warning in cart.warnings() {
        log::warn!("{}: {}", path.display(), warning);
    }
}
