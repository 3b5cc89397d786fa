//! Planning the split of a cartridge into per-region files.
//!
//! Splitting ignores the mapper: PRG goes out in 16 KB banks and CHR in
//! 8 KB banks, except that a PRG of up to 32 KB (NROM-sized, including the
//! 8 KB case) and a CHR of up to 8 KB are written whole.

use nes_junk_core::{CHR_BANK_SIZE, PRG_BANK_SIZE};

use crate::cartridge::Cartridge;

/// Largest PRG written as a single file.
const PRG_WHOLE_LIMIT: usize = 2 * PRG_BANK_SIZE;

/// One output file: a name suffix and the bytes that go into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact<'a> {
    /// Appended to the input's stem, e.g. `-PRG-03.bin`.
    pub suffix: String,
    pub data: &'a [u8],
}

/// Plan the files for `cart`, in emission order: trainer, PRG, CHR.
pub fn plan_split(cart: &Cartridge) -> Vec<Artifact<'_>> {
    let mut artifacts = Vec::new();

    if cart.has_trainer() {
        artifacts.push(Artifact {
            suffix: "-trainer.bin".to_string(),
            data: cart.trainer(),
        });
    }

    push_region(&mut artifacts, "PRG", cart.prg(), PRG_WHOLE_LIMIT, PRG_BANK_SIZE);
    push_region(&mut artifacts, "CHR", cart.chr(), CHR_BANK_SIZE, CHR_BANK_SIZE);

    artifacts
}

fn push_region<'a>(
    artifacts: &mut Vec<Artifact<'a>>,
    tag: &str,
    data: &'a [u8],
    whole_limit: usize,
    bank_size: usize,
) {
    if data.is_empty() {
        return;
    }

    if data.len() <= whole_limit {
        artifacts.push(Artifact {
            suffix: format!("-{tag}.bin"),
            data,
        });
        return;
    }

    debug_assert!(data.len() % bank_size == 0);
    for (i, chunk) in data.chunks(bank_size).enumerate() {
        artifacts.push(Artifact {
            suffix: format!("-{tag}-{i:02}.bin"),
            data: chunk,
        });
    }
}

#[cfg(test)]
#[path = "tests/split_tests.rs"]
mod tests;
