//! Byte-selection and padding plans produced by hash recipes.

/// The portion of a file fed into the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteRange {
    /// Bytes to skip from the start of the file
    pub offset: u64,
    /// Bytes to read; 0 means "to the end of the file"
    pub length: u64,
}

impl ByteRange {
    pub const fn new(offset: u64, length: u64) -> Self {
        Self { offset, length }
    }

    /// The whole file.
    pub const fn whole_file() -> Self {
        Self::new(0, 0)
    }

    /// Everything from `offset` to the end of the file.
    pub const fn from_offset(offset: u64) -> Self {
        Self::new(offset, 0)
    }

    /// Number of bytes that can actually be read from a file of `file_size`
    /// bytes. Never reaches past the end of the file; an offset beyond the
    /// end yields 0.
    pub fn effective_length(&self, file_size: u64) -> u64 {
        let available = file_size.saturating_sub(self.offset);
        if self.length == 0 {
            available
        } else {
            self.length.min(available)
        }
    }
}

/// Synthetic bytes appended after the real file data runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingSpec {
    /// Fill byte value (0x00 or 0xFF in practice)
    pub fill_byte: u8,
    /// Size the hashed stream is padded up to
    pub target_size: u64,
}

impl PaddingSpec {
    pub const fn new(fill_byte: u8, target_size: u64) -> Self {
        Self {
            fill_byte,
            target_size,
        }
    }

    /// Zero-fill up to `target_size`.
    pub const fn zeros(target_size: u64) -> Self {
        Self::new(0x00, target_size)
    }

    /// Number of fill bytes needed after `consumed` real bytes.
    pub fn shortfall(&self, consumed: u64) -> u64 {
        self.target_size.saturating_sub(consumed)
    }
}

/// What a recipe decided to hash for one particular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HashPlan {
    pub range: ByteRange,
    pub padding: Option<PaddingSpec>,
}

impl HashPlan {
    pub const fn new(range: ByteRange) -> Self {
        Self {
            range,
            padding: None,
        }
    }

    /// Hash the whole file with no padding.
    pub const fn whole_file() -> Self {
        Self::new(ByteRange::whole_file())
    }

    pub const fn padded(mut self, padding: PaddingSpec) -> Self {
        self.padding = Some(padding);
        self
    }
}
