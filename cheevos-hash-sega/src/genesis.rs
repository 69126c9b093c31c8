//! Sega Genesis / Mega Drive hash recipe.
//!
//! The whole file is hashed and short dumps are zero-filled up to 6 MiB.

use cheevos_hash_core::{HashError, HashPlan, PaddingSpec, Platform, ReadSeek, RomHasher};

/// Canonical Genesis cartridge size the hash is padded to.
pub const CANONICAL_SIZE: u64 = 6 * 1024 * 1024;

/// Hash recipe for Genesis/Mega Drive ROMs.
#[derive(Debug, Default)]
pub struct GenesisHasher;

impl GenesisHasher {
    pub fn new() -> Self {
        Self
    }
}

impl RomHasher for GenesisHasher {
    fn label(&self) -> &'static str {
        Platform::Genesis.label()
    }

    fn platform(&self) -> Option<Platform> {
        Some(Platform::Genesis)
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["mdx", "md", "smd", "gen", "bin", "cue", "iso", "sms", "gg", "sg"]
    }

    fn plan(
        &self,
        _reader: &mut dyn ReadSeek,
        _file_size: u64,
    ) -> Result<Option<HashPlan>, HashError> {
        Ok(Some(
            HashPlan::whole_file().padded(PaddingSpec::zeros(CANONICAL_SIZE)),
        ))
    }
}

#[cfg(test)]
#[path = "tests/genesis_tests.rs"]
mod tests;
