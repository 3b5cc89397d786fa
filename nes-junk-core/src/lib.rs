//! Shared types for the nes-junk workspace.
//!
//! Everything in here is format-neutral plumbing used by both the iNES
//! parser and the reporting/splitting collaborators: error and warning
//! types, the hardware enums a header can describe, hash algorithm
//! selection, and byte-size formatting.

pub mod checksum;
pub mod error;
pub mod hardware;
pub mod util;
pub mod warning;

pub use checksum::{HashAlgorithm, HashAlgorithmParseError};
pub use error::FormatError;
pub use hardware::{Mirroring, TvSystem};
pub use warning::ParseWarning;

/// Magic bytes at the start of every iNES-family image: `"NES"` followed by MS-DOS EOF.
pub const INES_MAGIC: [u8; 4] = *b"NES\x1A";

/// Size of the fixed iNES header.
pub const HEADER_SIZE: usize = 16;

/// Size of the optional trainer block that sits between header and PRG.
pub const TRAINER_SIZE: usize = 512;

/// PRG-ROM bank unit (16 KB).
pub const PRG_BANK_SIZE: usize = 16 * 1024;

/// CHR-ROM bank unit (8 KB).
pub const CHR_BANK_SIZE: usize = 8 * 1024;
