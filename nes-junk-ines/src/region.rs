//! Cutting the body into trainer / PRG / CHR and undoing doubled dumps.

use nes_junk_core::{CHR_BANK_SIZE, PRG_BANK_SIZE};

use crate::header::Layout;

/// The three regions of an image, as owned copies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Regions {
    pub trainer: Vec<u8>,
    pub prg: Vec<u8>,
    pub chr: Vec<u8>,
}

/// Slice `body` (everything after the header) into trainer, PRG and CHR.
///
/// The layout must already have been validated against `body.len()`.
pub fn extract(body: &[u8], layout: &Layout) -> Regions {
    debug_assert!(body.len() >= layout.total_size());

    let (trainer, rest) = body.split_at(layout.trainer_size());
    let (prg, rest) = rest.split_at(layout.prg_size);
    let chr = &rest[..layout.chr_size];

    Regions {
        trainer: trainer.to_vec(),
        prg: prg.to_vec(),
        chr: chr.to_vec(),
    }
}

/// True when the first half of `data` equals the second half.
pub fn is_doubled(data: &[u8]) -> bool {
    let (lo, hi) = data.split_at(data.len() / 2);
    lo == hi
}

/// Collapse a region of exactly `full_size` bytes whose halves match.
///
/// Some old dumps store an 8 KB PRG or 4 KB CHR mirrored to fill a full
/// bank ("Galaxian (J)" has 8 KB PRG). Anything else is left alone.
fn collapse_if_doubled(data: &mut Vec<u8>, full_size: usize) -> bool {
    if data.len() == full_size && is_doubled(data) {
        data.truncate(full_size / 2);
        true
    } else {
        false
    }
}

/// Apply the doubling heuristic to PRG (16 KB) and CHR (8 KB).
pub fn collapse_doubled(regions: &mut Regions) {
    if collapse_if_doubled(&mut regions.prg, PRG_BANK_SIZE) {
        log::debug!("PRG halves are identical, keeping 8 KB");
    }
    if collapse_if_doubled(&mut regions.chr, CHR_BANK_SIZE) {
        log::debug!("CHR halves are identical, keeping 4 KB");
    }
}

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
