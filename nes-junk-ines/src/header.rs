//! iNES header access and layout classification.
//!
//! The 16-byte header is shared by three incompatible layouts. Bytes 0-6
//! mean the same thing in all of them; bytes 7-15 do not. Classification
//! looks at the detection bits in byte 7, the padding in bytes 12-15 and,
//! for NES 2.0 candidates, whether the file is actually big enough to hold
//! the extended ROM sizes.

use nes_junk_core::{
    CHR_BANK_SIZE, FormatError, HEADER_SIZE, INES_MAGIC, Mirroring, PRG_BANK_SIZE,
    ParseWarning, TRAINER_SIZE,
};

// ---------------------------------------------------------------------------
// Variant tag
// ---------------------------------------------------------------------------

/// Which of the three iNES header layouts an image uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InesVariant {
    /// Pre-standard iNES: only the low mapper nibble is trustworthy.
    Archaic,
    /// iNES 1.0 with clean padding in bytes 12-15.
    Normal,
    /// NES 2.0 (byte 7 bits 2-3 == 0b10 and the file is large enough).
    Nes2,
}

impl InesVariant {
    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Archaic => "Archaic",
            Self::Normal => "Normal",
            Self::Nes2 => "NES 2.0",
        }
    }
}

impl std::fmt::Display for InesVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// The raw 16-byte header with accessors for the layout-independent fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header([u8; HEADER_SIZE]);

impl Header {
    /// Take the header from the start of `data`, checking length and magic.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FormatError> {
        let bytes: [u8; HEADER_SIZE] = data
            .get(..HEADER_SIZE)
            .and_then(|h| <[u8; HEADER_SIZE]>::try_from(h).ok())
            .ok_or_else(|| FormatError::truncated(HEADER_SIZE as u64, data.len() as u64))?;
        if bytes[0..4] != INES_MAGIC {
            return Err(FormatError::BadMagic);
        }
        Ok(Self(bytes))
    }

    /// Raw header byte at `index` (0-15).
    pub fn byte(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Byte 4: PRG-ROM size in 16 KB units (LSB for NES 2.0).
    pub fn prg_banks(&self) -> u8 {
        self.0[4]
    }

    /// Byte 5: CHR-ROM size in 8 KB units (LSB for NES 2.0).
    pub fn chr_banks(&self) -> u8 {
        self.0[5]
    }

    /// Byte 6 bit 2.
    pub fn has_trainer(&self) -> bool {
        self.0[6] & 0x04 != 0
    }

    /// Byte 6 bit 1.
    pub fn battery(&self) -> bool {
        self.0[6] & 0x02 != 0
    }

    /// Byte 6 bit 3 overrides bit 0.
    pub fn mirroring(&self) -> Mirroring {
        if self.0[6] & 0x08 != 0 {
            Mirroring::FourScreen
        } else if self.0[6] & 0x01 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }

    /// Byte 7 bits 2-3: 0b10 marks a NES 2.0 candidate.
    pub fn variant_bits(&self) -> u8 {
        (self.0[7] >> 2) & 0x03
    }

    /// Bytes 12-15 are all zero, as an iNES 1.0 writer leaves them.
    pub fn padding_is_clean(&self) -> bool {
        self.0[12..16].iter().all(|&b| b == 0)
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Classification result: the variant and the region sizes to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub variant: InesVariant,
    pub has_trainer: bool,
    pub prg_size: usize,
    pub chr_size: usize,
}

impl Layout {
    pub fn trainer_size(&self) -> usize {
        if self.has_trainer { TRAINER_SIZE } else { 0 }
    }

    /// Bytes the declared regions occupy after the header.
    pub fn total_size(&self) -> usize {
        self.trainer_size() + self.prg_size + self.chr_size
    }
}

/// Decide the header layout and region sizes.
///
/// `body_len` is the number of bytes after the header. The result depends
/// only on header bytes 4-15 and `body_len`, never on ROM contents.
pub fn classify(header: &Header, body_len: usize) -> Layout {
    let base = Layout {
        variant: InesVariant::Archaic,
        has_trainer: header.has_trainer(),
        prg_size: PRG_BANK_SIZE * header.prg_banks() as usize,
        chr_size: CHR_BANK_SIZE * header.chr_banks() as usize,
    };

    match header.variant_bits() {
        2 => {
            // Byte 9 holds the size MSBs: low nibble PRG, high nibble CHR.
            let size_msb = header.byte(9);
            let extended = Layout {
                variant: InesVariant::Nes2,
                prg_size: base.prg_size + PRG_BANK_SIZE * (((size_msb & 0x0F) as usize) << 8),
                chr_size: base.chr_size + CHR_BANK_SIZE * (((size_msb & 0xF0) as usize) << 4),
                ..base
            };
            if body_len >= extended.total_size() {
                extended
            } else {
                log::debug!(
                    "NES 2.0 marker present but {} body bytes < {} required, treating as archaic",
                    body_len,
                    extended.total_size()
                );
                base
            }
        }
        0 if header.padding_is_clean() => Layout {
            variant: InesVariant::Normal,
            ..base
        },
        _ => base,
    }
}

/// Check a layout against the available body length.
///
/// Fails when the declared regions do not fit; records a warning when the
/// body is longer than needed.
pub fn validate(
    layout: &Layout,
    body_len: usize,
    warnings: &mut Vec<ParseWarning>,
) -> Result<(), FormatError> {
    let total = layout.total_size();
    if body_len < total {
        return Err(FormatError::truncated(
            (HEADER_SIZE + total) as u64,
            (HEADER_SIZE + body_len) as u64,
        ));
    }
    if layout.prg_size == 0 {
        return Err(FormatError::NoProgramData);
    }
    if body_len > total {
        warnings.push(ParseWarning::TrailingGarbage {
            excess: (body_len - total) as u64,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;
