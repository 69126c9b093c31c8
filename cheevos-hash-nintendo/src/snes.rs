//! SNES (Super Famicom) hash recipe.
//!
//! The whole file is hashed as-is (copier headers included) and short dumps
//! are zero-filled up to 8 MiB.

use cheevos_hash_core::{HashError, HashPlan, PaddingSpec, Platform, ReadSeek, RomHasher};

/// Canonical SNES cartridge size the hash is padded to.
pub const CANONICAL_SIZE: u64 = 8 * 1024 * 1024;

/// Hash recipe for SNES/Super Famicom ROMs.
#[derive(Debug, Default)]
pub struct SnesHasher;

impl SnesHasher {
    pub fn new() -> Self {
        Self
    }
}

impl RomHasher for SnesHasher {
    fn label(&self) -> &'static str {
        Platform::Snes.label()
    }

    fn platform(&self) -> Option<Platform> {
        Some(Platform::Snes)
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["smc", "fig", "sfc", "gd3", "gd7", "dx2", "bsx", "swc"]
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
#[path = "tests/snes_tests.rs"]
mod tests;
