//! Per-layout decoding of header bytes 6-13.
//!
//! Each variant reads the mapper number and its own extra fields from
//! disjoint bit positions. The result is an [`Extension`] payload tagged
//! with the variant it came from.

use nes_junk_core::{ParseWarning, TvSystem};

use crate::header::{Header, InesVariant};

/// Fields only an iNES 1.0 header carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalFields {
    pub tv_system: TvSystem,
    /// PRG-RAM size in bytes (byte 8 × 8 KB; 8 KB assumed when battery-backed and zero).
    pub prg_ram_size: u64,
    pub vs_system: bool,
    pub playchoice: bool,
}

/// Fields only a NES 2.0 header carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nes2Fields {
    pub submapper: u8,
    pub tv_system: TvSystem,
    /// Volatile PRG-RAM in bytes.
    pub prg_ram_size: u64,
    /// Battery-backed PRG-NVRAM/EEPROM in bytes.
    pub prg_nvram_size: u64,
    /// Volatile CHR-RAM in bytes.
    pub chr_ram_size: u64,
    /// Battery-backed CHR-NVRAM in bytes.
    pub chr_nvram_size: u64,
    pub vs_system: bool,
    pub vs_mode: u8,
    pub vs_ppu: u8,
    pub playchoice: bool,
}

/// Variant-specific header payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    Archaic,
    Normal(NormalFields),
    Nes2(Nes2Fields),
}

impl Extension {
    /// The variant this payload belongs to.
    pub fn variant(&self) -> InesVariant {
        match self {
            Self::Archaic => InesVariant::Archaic,
            Self::Normal(_) => InesVariant::Normal,
            Self::Nes2(_) => InesVariant::Nes2,
        }
    }
}

/// Decode a NES 2.0 RAM size shift value: `128 << (code - 1)`, 0 for none.
pub fn ram_size(code: u8, warnings: &mut Vec<ParseWarning>) -> u64 {
    match code {
        0 => 0,
        15 => {
            warnings.push(ParseWarning::ReservedRamSize { code });
            0
        }
        16.. => {
            warnings.push(ParseWarning::InvalidRamSize { code });
            0
        }
        _ => 128u64 << (code - 1),
    }
}

impl InesVariant {
    /// Decode the mapper number and the variant-specific fields.
    ///
    /// `battery` is the byte 6 flag, which iNES 1.0 uses to default the
    /// PRG-RAM size.
    pub fn decode_extended_fields(
        self,
        header: &Header,
        battery: bool,
        warnings: &mut Vec<ParseWarning>,
    ) -> (u16, Extension) {
        let mapper_lo = (header.byte(6) >> 4) as u16;
        let mapper_mid = (header.byte(7) & 0xF0) as u16;
        let vs_system = header.byte(7) & 0x01 != 0;
        let playchoice = header.byte(7) & 0x02 != 0;

        match self {
            Self::Archaic => (mapper_lo, Extension::Archaic),

            Self::Normal => {
                let mut prg_ram_size = 8192 * header.byte(8) as u64;
                if battery && prg_ram_size == 0 {
                    prg_ram_size = 8192;
                }
                let tv_system = if header.byte(9) & 0x01 != 0 {
                    TvSystem::Pal
                } else {
                    TvSystem::Ntsc
                };
                let fields = NormalFields {
                    tv_system,
                    prg_ram_size,
                    vs_system,
                    playchoice,
                };
                (mapper_mid | mapper_lo, Extension::Normal(fields))
            }

            Self::Nes2 => {
                let mapper_hi = ((header.byte(8) & 0x0F) as u16) << 8;
                let prg_ram = header.byte(10);
                let chr_ram = header.byte(11);
                let tv_system = if header.byte(12) & 0x02 != 0 {
                    TvSystem::Dual
                } else if header.byte(12) & 0x01 != 0 {
                    TvSystem::Pal
                } else {
                    TvSystem::Ntsc
                };
                let fields = Nes2Fields {
                    submapper: header.byte(8) >> 4,
                    tv_system,
                    prg_ram_size: ram_size(prg_ram & 0x0F, warnings),
                    prg_nvram_size: ram_size(prg_ram >> 4, warnings),
                    chr_ram_size: ram_size(chr_ram & 0x0F, warnings),
                    chr_nvram_size: ram_size(chr_ram >> 4, warnings),
                    vs_system,
                    vs_mode: header.byte(13) >> 4,
                    vs_ppu: header.byte(13) & 0x0F,
                    playchoice,
                };
                (mapper_hi | mapper_mid | mapper_lo, Extension::Nes2(fields))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/decode_tests.rs"]
mod tests;
