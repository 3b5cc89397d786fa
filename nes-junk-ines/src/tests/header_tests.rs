use super::*;

/// Build a 16-byte iNES header with the given size and flag bytes.
fn make_header(prg_banks: u8, chr_banks: u8, flags6: u8, flags7: u8) -> [u8; 16] {
    let mut h = [0u8; 16];
    h[0..4].copy_from_slice(&INES_MAGIC);
    h[4] = prg_banks;
    h[5] = chr_banks;
    h[6] = flags6;
    h[7] = flags7;
    h
}

fn header(bytes: [u8; 16]) -> Header {
    Header::from_bytes(&bytes).unwrap()
}

#[test]
fn test_from_bytes_short_input() {
    let err = Header::from_bytes(&[0x4E, 0x45, 0x53, 0x1A, 0, 0, 0, 0]).unwrap_err();
    assert!(matches!(
        err,
        FormatError::Truncated {
            expected: 16,
            actual: 8
        }
    ));
}

#[test]
fn test_from_bytes_bad_magic() {
    let mut h = make_header(1, 1, 0, 0);
    h[3] = 0x00;
    assert!(matches!(
        Header::from_bytes(&h).unwrap_err(),
        FormatError::BadMagic
    ));
}

#[test]
fn test_classify_normal() {
    let h = header(make_header(2, 1, 0x00, 0x00));
    let layout = classify(&h, 32768 + 8192);
    assert_eq!(
        layout,
        Layout {
            variant: InesVariant::Normal,
            has_trainer: false,
            prg_size: 32768,
            chr_size: 8192,
        }
    );
    assert_eq!(layout.total_size(), 40960);
}

#[test]
fn test_classify_dirty_padding_is_archaic() {
    let mut bytes = make_header(1, 1, 0x00, 0x00);
    bytes[12..16].copy_from_slice(b"Dude");
    let layout = classify(&header(bytes), 16384 + 8192);
    assert_eq!(layout.variant, InesVariant::Archaic);
    assert_eq!(layout.prg_size, 16384);
}

#[test]
fn test_classify_variant_bits_1_and_3_are_archaic() {
    for flags7 in [0x04, 0x0C] {
        let layout = classify(&header(make_header(1, 0, 0, flags7)), 16384);
        assert_eq!(layout.variant, InesVariant::Archaic, "flags7={flags7:#04x}");
    }
}

#[test]
fn test_classify_nes2_with_enough_data() {
    let layout = classify(&header(make_header(2, 1, 0x00, 0x08)), 32768 + 8192);
    assert_eq!(layout.variant, InesVariant::Nes2);
    assert_eq!(layout.prg_size, 32768);
    assert_eq!(layout.chr_size, 8192);
}

#[test]
fn test_classify_nes2_extended_sizes() {
    let mut bytes = make_header(1, 2, 0x04, 0x08);
    bytes[9] = 0x21; // PRG MSB 1, CHR MSB 2
    let prg = 16384 * (1 + 0x100);
    let chr = 8192 * (2 + 0x200);
    let layout = classify(&header(bytes), 512 + prg + chr);
    assert_eq!(layout.variant, InesVariant::Nes2);
    assert!(layout.has_trainer);
    assert_eq!(layout.prg_size, prg);
    assert_eq!(layout.chr_size, chr);
    assert_eq!(layout.total_size(), 512 + prg + chr);
}

#[test]
fn test_classify_nes2_lookahead_falls_back_to_archaic() {
    // Byte 9 claims huge ROMs, but the file only has the iNES 1.0 sizes.
    let mut bytes = make_header(1, 1, 0x00, 0x08);
    bytes[9] = 0x11;
    let layout = classify(&header(bytes), 16384 + 8192);
    assert_eq!(layout.variant, InesVariant::Archaic);
    assert_eq!(layout.prg_size, 16384);
    assert_eq!(layout.chr_size, 8192);
}

#[test]
fn test_classify_nes2_lookahead_counts_trainer() {
    let bytes = make_header(1, 0, 0x04, 0x08);
    assert_eq!(classify(&header(bytes), 16384).variant, InesVariant::Archaic);
    assert_eq!(classify(&header(bytes), 512 + 16384).variant, InesVariant::Nes2);
}

#[test]
fn test_classify_ignores_mapper_nibbles() {
    // Mapper bits live in the high nibbles of bytes 6 and 7.
    let a = header(make_header(1, 1, 0x10, 0x00));
    let b = header(make_header(1, 1, 0xF0, 0xF0));
    let layout = classify(&a, 30000);
    assert_eq!(layout, classify(&b, 30000));
    assert_eq!(layout.variant, InesVariant::Normal);
    assert_eq!(layout.prg_size, 16384);
    assert_eq!(layout.chr_size, 8192);
}

#[test]
fn test_validate_exact_size() {
    let layout = classify(&header(make_header(1, 1, 0, 0)), 16384 + 8192);
    let mut warnings = Vec::new();
    validate(&layout, 16384 + 8192, &mut warnings).unwrap();
    assert!(warnings.is_empty());
}

#[test]
fn test_validate_truncated() {
    let layout = classify(&header(make_header(2, 1, 0, 0)), 100);
    let mut warnings = Vec::new();
    let err = validate(&layout, 100, &mut warnings).unwrap_err();
    assert!(matches!(
        err,
        FormatError::Truncated {
            expected: 40976,
            actual: 116
        }
    ));
}

#[test]
fn test_validate_trailing_garbage_warns() {
    let layout = classify(&header(make_header(1, 0, 0, 0)), 16384 + 10);
    let mut warnings = Vec::new();
    validate(&layout, 16384 + 10, &mut warnings).unwrap();
    assert_eq!(warnings, vec![ParseWarning::TrailingGarbage { excess: 10 }]);
}

#[test]
fn test_validate_no_prg() {
    let layout = classify(&header(make_header(0, 1, 0, 0)), 8192);
    let mut warnings = Vec::new();
    assert!(matches!(
        validate(&layout, 8192, &mut warnings).unwrap_err(),
        FormatError::NoProgramData
    ));
}

#[test]
fn test_common_flags() {
    assert_eq!(header(make_header(1, 1, 0x00, 0)).mirroring(), Mirroring::Horizontal);
    assert_eq!(header(make_header(1, 1, 0x01, 0)).mirroring(), Mirroring::Vertical);
    assert_eq!(header(make_header(1, 1, 0x08, 0)).mirroring(), Mirroring::FourScreen);
    assert_eq!(header(make_header(1, 1, 0x09, 0)).mirroring(), Mirroring::FourScreen);

    let h = header(make_header(1, 1, 0x06, 0));
    assert!(h.battery());
    assert!(h.has_trainer());
    assert!(!header(make_header(1, 1, 0x00, 0)).battery());
}
