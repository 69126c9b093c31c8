//! Recipe registry and extension-based dispatch.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use cheevos_hash_core::{Digest, HashError, Platform, RomHasher};
use cheevos_hash_nintendo::{NesHasher, SnesHasher};
use cheevos_hash_sega::GenesisHasher;

use crate::generic::GenericHasher;
use crate::hasher::{HashOptions, compute_file_hash};

/// One recipe's digest for a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeHash {
    /// Output label (e.g. "SNES", "plain MD5")
    #[serde(rename = "console")]
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(rename = "md5")]
    pub digest: Digest,
}

impl fmt::Display for RecipeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.digest)
    }
}

/// Extension candidates for a path.
///
/// The extension is the text after the last `.` in the file name. A
/// `|`-separated list (`game.smc|sfc`) yields one candidate per segment.
/// Matching against recipes is case-sensitive.
pub fn extension_candidates(path: &Path) -> Vec<String> {
    let Some(name) = path.file_name() else {
        return Vec::new();
    };
    let name = name.to_string_lossy();
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.split('|').map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Context holding the registered hash recipes.
///
/// This is the main entry point for hashing a file with every applicable
/// recipe. Recipes with an extension list run only when the file's extension
/// matches; recipes without one run for every file, after the matched ones.
pub struct HashContext {
    hashers: Vec<Box<dyn RomHasher>>,
    options: HashOptions,
}

impl Default for HashContext {
    fn default() -> Self {
        Self::new()
    }
}

impl HashContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self {
            hashers: Vec::new(),
            options: HashOptions::default(),
        }
    }

    /// A context with every built-in recipe, in output order.
    pub fn with_default_recipes() -> Self {
        let mut ctx = Self::new();
        ctx.register(SnesHasher::new())
            .register(GenesisHasher::new())
            .register(NesHasher::new())
            .register(GenericHasher::new());
        ctx
    }

    pub fn with_options(mut self, options: HashOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &HashOptions {
        &self.options
    }

    /// Register a recipe.
    pub fn register<H: RomHasher + 'static>(&mut self, hasher: H) -> &mut Self {
        self.hashers.push(Box::new(hasher));
        self
    }

    /// Get all registered recipes.
    pub fn hashers(&self) -> impl Iterator<Item = &dyn RomHasher> {
        self.hashers.iter().map(|h| h.as_ref())
    }

    /// Recipes that apply to `path`, in the order they should run.
    pub fn recipes_for_path(&self, path: &Path) -> Vec<&dyn RomHasher> {
        let candidates = extension_candidates(path);

        let matched = self.hashers().filter(|h| {
            !h.file_extensions().is_empty()
                && candidates.iter().any(|ext| h.matches_extension(ext))
        });
        let always = self.hashers().filter(|h| h.file_extensions().is_empty());

        matched.chain(always).collect()
    }

    /// Hash `path` with every applicable recipe.
    ///
    /// Recipes that reject the file are skipped. A recipe that fails with an
    /// I/O error is skipped with a warning, or aborts the whole call when
    /// strict I/O is enabled.
    pub fn hash_file(&self, path: &Path) -> Result<Vec<RecipeHash>, HashError> {
        let mut results = Vec::new();

        for hasher in self.recipes_for_path(path) {
            log::debug!("{}: trying {}", path.display(), hasher.label());
            match compute_file_hash(path, hasher, &self.options) {
                Ok(Some(digest)) => results.push(RecipeHash {
                    label: hasher.label(),
                    platform: hasher.platform(),
                    digest,
                }),
                Ok(None) => {}
                Err(e) if self.options.strict_io => return Err(e),
                Err(e) => log::warn!("{}: {} hash failed: {e}", path.display(), hasher.label()),
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
