use std::fs::File;
use std::io::{ErrorKind, SeekFrom};
use std::path::Path;

use cheevos_hash_core::{ByteRange, Digest, HashError, Md5, PaddingSpec, ReadSeek, RomHasher};

const CHUNK_SIZE: usize = 4096;

/// Options that control how files are read while hashing.
#[derive(Debug, Clone, Default)]
pub struct HashOptions {
    /// Strict I/O: a read error in the middle of a file is returned as
    /// [`HashError::Io`] instead of being treated as end of data.
    ///
    /// Off by default, which matches the reference hasher: whatever was read
    /// before the failure is hashed and padded as if the file ended there.
    pub strict_io: bool,
}

impl HashOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_io(mut self, strict_io: bool) -> Self {
        self.strict_io = strict_io;
        self
    }
}

/// Digest the bytes selected by `range` from a reader.
///
/// Returns the number of bytes absorbed and the digest state, not yet
/// finalized, so the caller can append padding.
pub fn digest_reader_range(
    reader: &mut dyn ReadSeek,
    range: ByteRange,
    options: &HashOptions,
) -> Result<(u64, Md5), HashError> {
    let mut ctx = Md5::new();
    let file_size = reader.seek(SeekFrom::End(0))?;
    let mut remaining = range.effective_length(file_size);
    if remaining == 0 {
        return Ok((0, ctx));
    }

    reader.seek(SeekFrom::Start(range.offset))?;

    let mut buf = [0u8; CHUNK_SIZE];
    let mut consumed: u64 = 0;

    while remaining > 0 {
        let want = remaining.min(CHUNK_SIZE as u64) as usize;
        let n = match reader.read(&mut buf[..want]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) if options.strict_io => return Err(e.into()),
            Err(e) => {
                log::warn!("read failed after {consumed} bytes, treating as end of data: {e}");
                break;
            }
        };
        ctx.update(&buf[..n]);
        consumed += n as u64;
        remaining -= n as u64;
    }

    Ok((consumed, ctx))
}

/// Digest the bytes selected by `range` from the file at `path`.
///
/// A file that cannot be opened yields zero bytes consumed and a fresh
/// state; callers treat that as "no result".
pub fn digest_file_range(
    path: &Path,
    range: ByteRange,
    options: &HashOptions,
) -> Result<(u64, Md5), HashError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("cannot open {}: {e}", path.display());
            return Ok((0, Md5::new()));
        }
    };
    digest_reader_range(&mut file, range, options)
}

/// Absorb `count` copies of `fill_byte`, one chunk at a time.
pub fn pad(ctx: &mut Md5, fill_byte: u8, count: u64) {
    let fill = [fill_byte; CHUNK_SIZE];
    let mut remaining = count;
    while remaining > 0 {
        let n = remaining.min(CHUNK_SIZE as u64) as usize;
        ctx.update(&fill[..n]);
        remaining -= n as u64;
    }
}

/// Run a recipe over a reader: plan, digest the range, pad, finalize.
///
/// Returns `Ok(None)` when the recipe rejects the file or no bytes were read.
pub fn compute_hash(
    reader: &mut dyn ReadSeek,
    hasher: &dyn RomHasher,
    options: &HashOptions,
) -> Result<Option<Digest>, HashError> {
    let file_size = reader.seek(SeekFrom::End(0))?;
    let Some(plan) = hasher.plan(reader, file_size)? else {
        return Ok(None);
    };

    let (consumed, ctx) = digest_reader_range(reader, plan.range, options)?;
    Ok(finish(hasher, consumed, ctx, plan.padding))
}

/// Run a recipe over the file at `path`.
///
/// The file is opened once to let the recipe inspect it and again to stream
/// the selected range, the same access pattern as the reference hasher.
pub fn compute_file_hash(
    path: &Path,
    hasher: &dyn RomHasher,
    options: &HashOptions,
) -> Result<Option<Digest>, HashError> {
    let plan = {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                log::debug!("cannot open {}: {e}", path.display());
                return Ok(None);
            }
        };
        let file_size = file.metadata()?.len();
        hasher.plan(&mut file, file_size)?
    };
    let Some(plan) = plan else {
        return Ok(None);
    };

    let (consumed, ctx) = digest_file_range(path, plan.range, options)?;
    Ok(finish(hasher, consumed, ctx, plan.padding))
}

fn finish(
    hasher: &dyn RomHasher,
    consumed: u64,
    mut ctx: Md5,
    padding: Option<PaddingSpec>,
) -> Option<Digest> {
    if consumed == 0 {
        log::debug!("{}: no data in hash range", hasher.label());
        return None;
    }

    if let Some(padding) = padding {
        let shortfall = padding.shortfall(consumed);
        if shortfall > 0 {
            log::debug!(
                "{}: padding {} bytes with 0x{:02X}",
                hasher.label(),
                shortfall,
                padding.fill_byte
            );
        }
        pad(&mut ctx, padding.fill_byte, shortfall);
    }

    Some(ctx.finalize())
}

#[cfg(test)]
#[path = "tests/hasher_tests.rs"]
mod tests;
