//! iNES / NES 2.0 cartridge image parsing.
//!
//! Supports:
//! - Archaic iNES (pre-1.0 headers with junk in bytes 7-15)
//! - iNES 1.0
//! - NES 2.0
//!
//! [`Cartridge::parse`] classifies the header, validates the declared sizes
//! against the input, cuts out the trainer/PRG/CHR regions, collapses
//! doubled 8 KB PRG / 4 KB CHR dumps and decodes the variant fields.
//! [`plan_split`] turns the result into per-bank output files.

pub mod cartridge;
pub mod decode;
pub mod header;
pub mod prg_base;
pub mod region;
pub mod split;

pub use cartridge::Cartridge;
pub use decode::{Extension, Nes2Fields, NormalFields};
pub use header::{Header, InesVariant, Layout};
pub use prg_base::guess_prg_base;
pub use split::{Artifact, plan_split};
