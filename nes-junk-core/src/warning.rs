use std::fmt;

/// A non-fatal finding made while parsing.
///
/// Warnings are collected on the parsed cartridge in the order they were
/// found; it is up to the caller to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseWarning {
    /// Bytes after the last declared region were ignored.
    TrailingGarbage { excess: u64 },
    /// A NES 2.0 RAM size field used the reserved shift value 15.
    ReservedRamSize { code: u8 },
    /// A RAM size shift value outside the 4-bit range.
    InvalidRamSize { code: u8 },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrailingGarbage { excess } => {
                write!(f, "trailing garbage ({excess} bytes), ignoring")
            }
            Self::ReservedRamSize { code } => write!(f, "ram size value {code} is reserved"),
            Self::InvalidRamSize { code } => write!(f, "invalid ram size value: {code}"),
        }
    }
}
