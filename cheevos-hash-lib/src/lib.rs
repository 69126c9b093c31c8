//! ROM hashing for achievement-database lookups.
//!
//! Each console has a recipe that selects which bytes of a ROM are digested
//! and how short dumps are padded. The per-console functions below return
//! the 32-character lowercase MD5, or `None` when the file is missing, empty
//! or not a ROM for that console.

use std::path::Path;

use cheevos_hash_core::RomHasher;
use cheevos_hash_nintendo::{NesHasher, SnesHasher};
use cheevos_hash_sega::GenesisHasher;

pub mod context;
pub mod generic;
pub mod hasher;

pub use cheevos_hash_core::{
    ByteRange, Digest, HashError, HashPlan, Md5, PaddingSpec, Platform, ReadSeek,
};
pub use context::{HashContext, RecipeHash, extension_candidates};
pub use generic::GenericHasher;
pub use hasher::{
    HashOptions, compute_file_hash, compute_hash, digest_file_range, digest_reader_range, pad,
};

/// Plain MD5 of the whole file.
pub fn hash_generic(path: &Path) -> Option<String> {
    hash_with(&GenericHasher::new(), path)
}

/// SNES hash: whole file, zero-filled to 8 MiB.
pub fn hash_snes(path: &Path) -> Option<String> {
    hash_with(&SnesHasher::new(), path)
}

/// Genesis hash: whole file, zero-filled to 6 MiB.
pub fn hash_genesis(path: &Path) -> Option<String> {
    hash_with(&GenesisHasher::new(), path)
}

/// NES hash: PRG window after the iNES header, 0xFF-filled.
pub fn hash_nes(path: &Path) -> Option<String> {
    hash_with(&NesHasher::new(), path)
}

fn hash_with(hasher: &dyn RomHasher, path: &Path) -> Option<String> {
    match compute_file_hash(path, hasher, &HashOptions::default()) {
        Ok(digest) => digest.map(|d| d.to_hex()),
        Err(e) => {
            log::warn!("{}: {} hash failed: {e}", path.display(), hasher.label());
            None
        }
    }
}
