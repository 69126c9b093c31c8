use std::io::{Read, Seek};

pub mod digest;
pub mod error;
pub mod md5;
pub mod plan;
pub mod platform;

pub use digest::Digest;
pub use error::HashError;
pub use md5::Md5;
pub use plan::{ByteRange, HashPlan, PaddingSpec};
pub use platform::Platform;

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// A hash recipe: decides which bytes of a ROM file are digested and how the
/// stream is padded.
///
/// Recipes only inspect the file and return a [`HashPlan`]; the streaming
/// itself is done by a shared driver so every recipe reads, pads, and
/// finalizes the same way.
pub trait RomHasher: Send + Sync {
    /// Label printed next to the digest (e.g. `"SNES"`, `"plain MD5"`).
    fn label(&self) -> &'static str;

    /// The console this recipe belongs to, if any.
    fn platform(&self) -> Option<Platform> {
        None
    }

    /// File extensions (without the dot) that select this recipe.
    ///
    /// An empty list means the recipe is attempted for every file.
    fn file_extensions(&self) -> &'static [&'static str] {
        &[]
    }

    /// Case-sensitive extension check against [`file_extensions`](RomHasher::file_extensions).
    fn matches_extension(&self, extension: &str) -> bool {
        self.file_extensions().contains(&extension)
    }

    /// Inspect the file and decide what to hash.
    ///
    /// # Arguments
    /// * `reader` - The ROM file (position is unspecified on entry)
    /// * `file_size` - Total size of the file in bytes
    ///
    /// # Returns
    /// * `Ok(Some(plan))` - The bytes and padding to digest
    /// * `Ok(None)` - The file does not belong to this recipe
    /// * `Err(HashError)` - Reading the file failed
    fn plan(
        &self,
        reader: &mut dyn ReadSeek,
        file_size: u64,
    ) -> Result<Option<HashPlan>, HashError>;
}
