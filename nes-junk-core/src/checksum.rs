use serde::{Deserialize, Serialize};

/// Digest algorithms the report can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// CRC-32 (IEEE)
    Crc32,
    /// MD5 (128-bit)
    Md5,
    /// SHA-1 (160-bit)
    Sha1,
}

/// Report order.
const ALL_ALGORITHMS: &[HashAlgorithm] =
    &[HashAlgorithm::Crc32, HashAlgorithm::Md5, HashAlgorithm::Sha1];

impl HashAlgorithm {
    /// Label used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crc32 => "CRC32",
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
        }
    }

    /// All accepted spellings (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Crc32 => &["crc32", "crc", "crc-32"],
            Self::Md5 => &["md5"],
            Self::Sha1 => &["sha1", "sha-1"],
        }
    }

    /// Every algorithm, in report order.
    pub fn all() -> &'static [HashAlgorithm] {
        ALL_ALGORITHMS
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string cannot be parsed into a `HashAlgorithm`.
#[derive(Debug, Clone)]
pub struct HashAlgorithmParseError(pub String);

impl std::fmt::Display for HashAlgorithmParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown hash algorithm: '{}'", self.0)
    }
}

impl std::error::Error for HashAlgorithmParseError {}

impl std::str::FromStr for HashAlgorithm {
    type Err = HashAlgorithmParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_ALGORITHMS
            .iter()
            .copied()
            .find(|alg| alg.aliases().contains(&lower.as_str()))
            .ok_or_else(|| HashAlgorithmParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/checksum_tests.rs"]
mod tests;
