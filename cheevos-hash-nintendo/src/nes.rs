//! NES (Famicom) hash recipe.
//!
//! The achievement database hashes NES games the way its FCEU-based emulator
//! loads PRG ROM: the iNES header (and trainer, if flagged) is skipped, the
//! declared PRG size is rounded up to a power of two for most mappers, and a
//! short dump is filled out with 0xFF. Every detail here changes the digest,
//! so the rules are reproduced exactly, including the trainer skip being one
//! header length (16 bytes) rather than the real 512-byte trainer size.

use std::io::{Read, SeekFrom};

use cheevos_hash_core::{
    ByteRange, HashError, HashPlan, PaddingSpec, Platform, ReadSeek, RomHasher,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// iNES magic bytes: "NES" followed by MS-DOS EOF.
pub const INES_MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

/// Size of the iNES header.
pub const HEADER_SIZE: u64 = 16;

/// One PRG ROM bank.
pub const PRG_BANK_SIZE: u64 = 0x4000;

const FLAG_TRAINER: u8 = 0x04;

/// Bank count used when the header declares zero PRG banks.
const ZERO_BANKS_AS: u64 = 256;

/// Mappers whose PRG size is hashed as declared instead of rounded up.
const UNROUNDED_MAPPERS: [u8; 3] = [53, 198, 228];

const FILL_BYTE: u8 = 0xFF;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// The fields of an iNES header that affect the hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NesHeader {
    /// Declared PRG ROM size in 16 KB banks (byte 4)
    pub prg_banks: u8,
    /// Declared CHR ROM size in 8 KB banks (byte 5)
    pub chr_banks: u8,
    /// Flags 6: mapper low nibble, trainer, mirroring (byte 6)
    pub flags6: u8,
    /// Flags 7: mapper high nibble (byte 7)
    pub flags7: u8,
}

impl NesHeader {
    /// Parse the first 16 bytes of a file.
    pub fn parse(buf: &[u8]) -> Result<Self, HashError> {
        if (buf.len() as u64) < HEADER_SIZE {
            return Err(HashError::TooSmall {
                expected: HEADER_SIZE,
                actual: buf.len() as u64,
            });
        }

        if buf[0..4] != INES_MAGIC {
            return Err(HashError::invalid_format(format!(
                "unrecognized iNES magic: [{:02X}, {:02X}, {:02X}, {:02X}]",
                buf[0], buf[1], buf[2], buf[3]
            )));
        }

        Ok(Self {
            prg_banks: buf[4],
            chr_banks: buf[5],
            flags6: buf[6],
            flags7: buf[7],
        })
    }

    /// 8-bit mapper number from the high nibbles of flags 6 and 7.
    pub fn mapper(&self) -> u8 {
        (self.flags6 >> 4) | (self.flags7 & 0xF0)
    }

    pub fn has_trainer(&self) -> bool {
        self.flags6 & FLAG_TRAINER != 0
    }

    /// Whether the PRG bank count is rounded up to a power of two.
    pub fn rounds_prg_size(&self) -> bool {
        !UNROUNDED_MAPPERS.contains(&self.mapper())
    }

    /// Number of PRG banks covered by the hash.
    pub fn hashed_banks(&self) -> u64 {
        if !self.rounds_prg_size() {
            return u64::from(self.prg_banks);
        }
        match self.prg_banks {
            0 => ZERO_BANKS_AS,
            n => u64::from(n).next_power_of_two(),
        }
    }

    /// Offset of the first hashed byte.
    pub fn data_offset(&self) -> u64 {
        if self.has_trainer() {
            HEADER_SIZE * 2
        } else {
            HEADER_SIZE
        }
    }

    /// Size of the hashed window, which is also the padded size.
    pub fn hash_window(&self) -> u64 {
        PRG_BANK_SIZE * self.hashed_banks()
    }

    /// The hash plan for a file carrying this header.
    ///
    /// Returns `None` when the window is empty (zero banks on an unrounded
    /// mapper), since there is nothing to hash.
    pub fn hash_plan(&self) -> Option<HashPlan> {
        let window = self.hash_window();
        if window == 0 {
            return None;
        }
        let range = ByteRange::new(self.data_offset(), window);
        Some(HashPlan::new(range).padded(PaddingSpec::new(FILL_BYTE, window)))
    }
}

/// Read and parse the header at the start of the file.
fn read_header(reader: &mut dyn ReadSeek) -> Result<NesHeader, HashError> {
    reader.seek(SeekFrom::Start(0))?;
    let mut buf = Vec::with_capacity(HEADER_SIZE as usize);
    reader.take(HEADER_SIZE).read_to_end(&mut buf)?;
    NesHeader::parse(&buf)
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// Hash recipe for NES/Famicom ROMs in iNES format.
#[derive(Debug, Default)]
pub struct NesHasher;

impl NesHasher {
    pub fn new() -> Self {
        Self
    }
}

impl RomHasher for NesHasher {
    fn label(&self) -> &'static str {
        Platform::Nes.label()
    }

    fn platform(&self) -> Option<Platform> {
        Some(Platform::Nes)
    }

    fn plan(
        &self,
        reader: &mut dyn ReadSeek,
        _file_size: u64,
    ) -> Result<Option<HashPlan>, HashError> {
        let header = match read_header(reader) {
            Ok(header) => header,
            Err(e @ HashError::Io(_)) => return Err(e),
            Err(e) => {
                log::debug!("NES: {e}");
                return Ok(None);
            }
        };

        log::debug!(
            "NES: mapper {} prg_banks {} hashed_banks {} trainer {}",
            header.mapper(),
            header.prg_banks,
            header.hashed_banks(),
            header.has_trainer(),
        );

        Ok(header.hash_plan())
    }
}

#[cfg(test)]
#[path = "tests/nes_tests.rs"]
mod tests;
