//! The parsed cartridge record.

use std::io::Read;

use nes_junk_core::{FormatError, HEADER_SIZE, Mirroring, ParseWarning};

use crate::decode::Extension;
use crate::header::{self, Header, InesVariant};
use crate::region::{self, Regions};

/// A fully parsed iNES image.
///
/// Built in one pass by [`Cartridge::parse`] and immutable afterwards.
/// `prg` is never empty and `trainer` is either empty or 512 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cartridge {
    header: Header,
    mapper: u16,
    trainer: Vec<u8>,
    prg: Vec<u8>,
    chr: Vec<u8>,
    mirroring: Mirroring,
    battery: bool,
    extension: Extension,
    warnings: Vec<ParseWarning>,
}

impl Cartridge {
    /// Parse a complete image held in memory.
    pub fn parse(data: &[u8]) -> Result<Self, FormatError> {
        let header = Header::from_bytes(data)?;
        let body = &data[HEADER_SIZE..];
        let mut warnings = Vec::new();

        let layout = header::classify(&header, body.len());
        header::validate(&layout, body.len(), &mut warnings)?;
        log::debug!(
            "classified as {} (trainer={}, prg={}, chr={})",
            layout.variant,
            layout.has_trainer,
            layout.prg_size,
            layout.chr_size
        );

        let mut regions = region::extract(body, &layout);
        region::collapse_doubled(&mut regions);

        let battery = header.battery();
        let (mapper, extension) = layout
            .variant
            .decode_extended_fields(&header, battery, &mut warnings);

        let Regions { trainer, prg, chr } = regions;
        Ok(Self {
            header,
            mapper,
            trainer,
            prg,
            chr,
            mirroring: header.mirroring(),
            battery,
            extension,
            warnings,
        })
    }

    /// Read an image from a stream until EOF, then parse it.
    pub fn read(reader: &mut dyn Read) -> Result<Self, FormatError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::parse(&data)
    }

    pub fn variant(&self) -> InesVariant {
        self.extension.variant()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Mapper number (4, 8 or 12 significant bits depending on the variant).
    pub fn mapper(&self) -> u16 {
        self.mapper
    }

    /// Trainer bytes (empty when the image has none).
    pub fn trainer(&self) -> &[u8] {
        &self.trainer
    }

    /// PRG-ROM bytes after the doubling heuristic.
    pub fn prg(&self) -> &[u8] {
        &self.prg
    }

    /// CHR-ROM bytes after the doubling heuristic (empty for CHR-RAM boards).
    pub fn chr(&self) -> &[u8] {
        &self.chr
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    pub fn battery(&self) -> bool {
        self.battery
    }

    pub fn has_trainer(&self) -> bool {
        !self.trainer.is_empty()
    }

    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    /// Non-fatal findings, in the order they were made.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }
}

#[cfg(test)]
#[path = "tests/cartridge_tests.rs"]
mod tests;
