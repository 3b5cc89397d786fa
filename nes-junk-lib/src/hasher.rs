use sha1::Digest;

use nes_junk_core::HashAlgorithm;
use nes_junk_ines::Cartridge;

/// Digests of one byte range. Only the requested algorithms are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionHashes {
    pub crc32: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    /// Number of bytes that were hashed
    pub data_size: u64,
}

impl RegionHashes {
    /// Lowercase hex digest for `algorithm`, if it was computed.
    pub fn get(&self, algorithm: HashAlgorithm) -> Option<&str> {
        match algorithm {
            HashAlgorithm::Crc32 => self.crc32.as_deref(),
            HashAlgorithm::Md5 => self.md5.as_deref(),
            HashAlgorithm::Sha1 => self.sha1.as_deref(),
        }
    }
}

/// The three digests a cartridge report shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartridgeHashes {
    /// PRG followed by CHR (the trainer is not part of the ROM)
    pub rom: RegionHashes,
    pub prg: RegionHashes,
    pub chr: RegionHashes,
}

/// Hash the concatenation of `parts` in a single pass.
pub fn hash_parts(parts: &[&[u8]], algorithms: &[HashAlgorithm]) -> RegionHashes {
    let mut crc = algorithms
        .contains(&HashAlgorithm::Crc32)
        .then(crc32fast::Hasher::new);
    let mut md5_ctx = algorithms
        .contains(&HashAlgorithm::Md5)
        .then(md5::Context::new);
    let mut sha = algorithms
        .contains(&HashAlgorithm::Sha1)
        .then(sha1::Sha1::new);

    let mut data_size: u64 = 0;
    for part in parts {
        if let Some(ref mut c) = crc {
            c.update(part);
        }
        if let Some(ref mut m) = md5_ctx {
            m.consume(part);
        }
        if let Some(ref mut s) = sha {
            s.update(part);
        }
        data_size += part.len() as u64;
    }

    RegionHashes {
        crc32: crc.map(|c| format!("{:08x}", c.finalize())),
        md5: md5_ctx.map(|m| format!("{:x}", m.compute())),
        sha1: sha.map(|s| format!("{:x}", s.finalize())),
        data_size,
    }
}

/// Compute ROM, PRG and CHR digests of a parsed cartridge.
pub fn hash_cartridge(cart: &Cartridge, algorithms: &[HashAlgorithm]) -> CartridgeHashes {
    CartridgeHashes {
        rom: hash_parts(&[cart.prg(), cart.chr()], algorithms),
        prg: hash_parts(&[cart.prg()], algorithms),
        chr: hash_parts(&[cart.chr()], algorithms),
    }
}

#[cfg(test)]
#[path = "tests/hasher_tests.rs"]
mod tests;
