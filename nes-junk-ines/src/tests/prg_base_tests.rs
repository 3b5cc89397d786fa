use super::*;

/// A bank filled with NOPs whose NMI/RESET/IRQ vectors are `vectors`.
fn bank_with_vectors(len: usize, vectors: [u16; 3]) -> Vec<u8> {
    let mut bank = vec![0xEA; len];
    let tail = len - 6;
    for (i, v) in vectors.iter().enumerate() {
        bank[tail + i * 2..tail + i * 2 + 2].copy_from_slice(&v.to_le_bytes());
    }
    bank
}

#[test]
fn test_small_prg_low_base() {
    let prg = bank_with_vectors(16384, [0x8100, 0x8000, 0xBFF0]);
    assert_eq!(guess_prg_base(&prg), Some(0x8000));
}

#[test]
fn test_small_prg_high_base() {
    let prg = bank_with_vectors(16384, [0xC100, 0xC000, 0xFFF0]);
    assert_eq!(guess_prg_base(&prg), Some(0xC000));
}

#[test]
fn test_small_prg_mixed_vectors_unknown() {
    let prg = bank_with_vectors(16384, [0x8100, 0xC000, 0xC000]);
    assert_eq!(guess_prg_base(&prg), None);
}

#[test]
fn test_tiny_prg_bases() {
    for base in [0x8000u16, 0xA000, 0xC000, 0xE000] {
        let prg = bank_with_vectors(8192, [base, base + 0x10, base + 0x1FFF]);
        assert_eq!(guess_prg_base(&prg), Some(base), "base {base:#06x}");
    }
}

#[test]
fn test_tiny_prg_spanning_windows_unknown() {
    let prg = bank_with_vectors(8192, [0x9FFF, 0xA000, 0xA000]);
    assert_eq!(guess_prg_base(&prg), None);
}

#[test]
fn test_large_prg_not_guessed() {
    let prg = bank_with_vectors(32768, [0xC000, 0xC000, 0xC000]);
    assert_eq!(guess_prg_base(&prg), None);
}

#[test]
fn test_low_vectors_unknown() {
    let prg = bank_with_vectors(16384, [0x0000, 0x0000, 0x0000]);
    assert_eq!(guess_prg_base(&prg), None);
}
