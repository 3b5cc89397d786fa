use thiserror::Error;

/// Fatal errors raised while reading an iNES image.
///
/// None of these leave a partially built cartridge behind.
#[derive(Debug, Error)]
pub enum FormatError {
    /// I/O error while reading the image
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The first four bytes are not `NES\x1A`
    #[error("iNES magic not found")]
    BadMagic,

    /// The header (or the regions it declares) extends past the end of the input
    #[error("incomplete file: expected {expected} bytes, got {actual}")]
    Truncated { expected: u64, actual: u64 },

    /// The header declares no PRG-ROM at all
    #[error("header declares no PRG-ROM")]
    NoProgramData,
}

impl FormatError {
    pub fn truncated(expected: u64, actual: u64) -> Self {
        Self::Truncated { expected, actual }
    }
}
