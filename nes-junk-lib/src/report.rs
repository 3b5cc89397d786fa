//! Report model for `check`.
//!
//! Turns a parsed cartridge (and optionally its digests) into ordered
//! sections of label/value rows. Frontends decide how to colour and print
//! them; the plain [`Display`](std::fmt::Display) rendering aligns labels
//! within each section.

use std::fmt;

use nes_junk_core::util::format_bytes;
use nes_junk_core::{CHR_BANK_SIZE, HashAlgorithm, PRG_BANK_SIZE};
use nes_junk_ines::{Cartridge, Extension, Nes2Fields, NormalFields, guess_prg_base};

use crate::hasher::{CartridgeHashes, RegionHashes};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportSection {
    /// Heading printed above the rows (rows are then indented)
    pub title: Option<String>,
    pub rows: Vec<ReportRow>,
}

impl ReportSection {
    fn new(title: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            rows: Vec::new(),
        }
    }

    fn row(mut self, label: &str, value: impl Into<String>) -> Self {
        self.rows.push(ReportRow {
            label: label.to_string(),
            value: value.into(),
        });
        self
    }

    /// Width of the longest label, for alignment.
    pub fn label_width(&self) -> usize {
        self.rows.iter().map(|r| r.label.len()).max().unwrap_or(0)
    }

    /// Value for `label`, if the section has such a row.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

/// One printed line of a laid-out report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine<'a> {
    Blank,
    /// Section heading, printed as `title:`
    Title(&'a str),
    /// `label` is already padded to the section's label width
    Row {
        indent: &'static str,
        label: String,
        value: &'a str,
    },
}

impl Report {
    /// First value for `label` across all sections.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.sections.iter().find_map(|s| s.get(label))
    }

    /// Section with the given title.
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections
            .iter()
            .find(|s| s.title.as_deref() == Some(title))
    }

    /// Lay the report out for printing.
    ///
    /// Sections are separated by a blank line, except that consecutive
    /// titled sections form one block. Rows of titled sections are indented.
    pub fn lines(&self) -> Vec<ReportLine<'_>> {
        let mut lines = Vec::new();
        for (i, section) in self.sections.iter().enumerate() {
            let continues_block =
                section.title.is_some() && i > 0 && self.sections[i - 1].title.is_some();
            if i > 0 && !continues_block {
                lines.push(ReportLine::Blank);
            }
            let indent = match &section.title {
                Some(title) => {
                    lines.push(ReportLine::Title(title));
                    "  "
                }
                None => "",
            };
            let width = section.label_width();
            lines.extend(section.rows.iter().map(|row| ReportLine::Row {
                indent,
                label: format!("{:<width$}", row.label),
                value: &row.value,
            }));
        }
        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            match line {
                ReportLine::Blank => writeln!(f)?,
                ReportLine::Title(title) => writeln!(f, "{title}:")?,
                ReportLine::Row {
                    indent,
                    label,
                    value,
                } => writeln!(f, "{indent}{label} : {value}")?,
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

fn base_str(base: Option<u16>) -> String {
    match base {
        Some(b) => format!("${:04X}", b),
        None => "UNKNOWN".to_string(),
    }
}

/// Size plus note: load address for 8/16 KB PRG, bank count above that.
fn prg_size_str(prg: &[u8]) -> String {
    let size = format_bytes(prg.len() as u64);
    if prg.len() <= PRG_BANK_SIZE {
        format!("{} (base={})", size, base_str(guess_prg_base(prg)))
    } else {
        format!("{} ({} * 16KB)", size, prg.len() / PRG_BANK_SIZE)
    }
}

/// Size plus bank count when larger than one 8 KB bank.
fn eight_kb_banks_str(len: u64) -> String {
    let size = format_bytes(len);
    if len > CHR_BANK_SIZE as u64 {
        format!("{} ({} * 8KB)", size, len / CHR_BANK_SIZE as u64)
    } else {
        size
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn hash_section(title: &str, hashes: &RegionHashes, algorithms: &[HashAlgorithm]) -> ReportSection {
    algorithms
        .iter()
        .fold(ReportSection::new(Some(title)), |section, &alg| {
            section.row(alg.name(), hashes.get(alg).unwrap_or("-"))
        })
}

fn normal_section(fields: &NormalFields) -> ReportSection {
    ReportSection::new(None)
        .row("TV system", fields.tv_system.name())
        .row("PRG-RAM size", eight_kb_banks_str(fields.prg_ram_size))
        .row("Vs. system", yes_no(fields.vs_system))
        .row("PlayChoice", yes_no(fields.playchoice))
}

fn nes2_section(fields: &Nes2Fields) -> ReportSection {
    ReportSection::new(None)
        .row("Submapper", fields.submapper.to_string())
        .row("TV system", fields.tv_system.name())
        .row("PRG-RAM (volatile) size", format_bytes(fields.prg_ram_size))
        .row("PRG-RAM (nonvolatile) size", format_bytes(fields.prg_nvram_size))
        .row("CHR-RAM (volatile) size", format_bytes(fields.chr_ram_size))
        .row("CHR-RAM (nonvolatile) size", format_bytes(fields.chr_nvram_size))
        .row("Vs. system", yes_no(fields.vs_system))
        .row("Vs. mode", fields.vs_mode.to_string())
        .row("Vs. PPU", fields.vs_ppu.to_string())
        .row("PlayChoice", yes_no(fields.playchoice))
}

/// Build the report for `cart`. Hash sections are included when `hashes`
/// is given and `algorithms` is non-empty.
pub fn build_report(
    cart: &Cartridge,
    hashes: Option<&CartridgeHashes>,
    algorithms: &[HashAlgorithm],
) -> Report {
    let mut sections = vec![
        ReportSection::new(None).row("iNES variant", cart.variant().name()),
        ReportSection::new(None)
            .row("Mapper", cart.mapper().to_string())
            .row("PRG size", prg_size_str(cart.prg()))
            .row("CHR size", eight_kb_banks_str(cart.chr().len() as u64))
            .row("Mirroring", cart.mirroring().name())
            .row("Battery", yes_no(cart.battery()))
            .row("Trainer", yes_no(cart.has_trainer())),
    ];

    if let Some(h) = hashes
        && !algorithms.is_empty()
    {
        sections.push(hash_section("ROM hash", &h.rom, algorithms));
        sections.push(hash_section("PRG hash", &h.prg, algorithms));
        sections.push(hash_section("CHR hash", &h.chr, algorithms));
    }

    match cart.extension() {
        Extension::Archaic => {}
        Extension::Normal(fields) => sections.push(normal_section(fields)),
        Extension::Nes2(fields) => sections.push(nes2_section(fields)),
    }

    Report { sections }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
