//! Guessing where a small PRG-ROM is mapped in CPU address space.
//!
//! A 16 KB or 8 KB PRG does not fill the whole $8000-$FFFF window, so the
//! load address is ambiguous. The NMI/RESET/IRQ vectors in the last six
//! bytes of the bank usually point into the bank itself, which gives it away.

use nes_junk_core::PRG_BANK_SIZE;

const TINY_PRG_SIZE: usize = PRG_BANK_SIZE / 2;

/// Candidate bases for a 16 KB PRG, each covering 16 KB.
const SMALL_BASES: [u16; 2] = [0x8000, 0xC000];

/// Candidate bases for an 8 KB PRG, each covering 8 KB.
const TINY_BASES: [u16; 4] = [0x8000, 0xA000, 0xC000, 0xE000];

/// Read the three interrupt vectors from the end of a bank.
fn interrupt_vectors(bank: &[u8]) -> [u16; 3] {
    let v = &bank[bank.len() - 6..];
    [
        u16::from_le_bytes([v[0], v[1]]),
        u16::from_le_bytes([v[2], v[3]]),
        u16::from_le_bytes([v[4], v[5]]),
    ]
}

fn guess_among(bank: &[u8], bases: &[u16]) -> Option<u16> {
    let window = bank.len() as u32;
    let vectors = interrupt_vectors(bank);
    bases.iter().copied().find(|&base| {
        vectors
            .iter()
            .all(|&addr| (base as u32..base as u32 + window).contains(&(addr as u32)))
    })
}

/// Guess the base address of an 8 KB or 16 KB PRG. `None` when the vectors
/// disagree or the PRG has some other size.
pub fn guess_prg_base(prg: &[u8]) -> Option<u16> {
    match prg.len() {
        TINY_PRG_SIZE => guess_among(prg, &TINY_BASES),
        PRG_BANK_SIZE => guess_among(prg, &SMALL_BASES),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/prg_base_tests.rs"]
mod tests;
