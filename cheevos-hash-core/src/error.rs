use thiserror::Error;

/// Errors that can occur while planning or computing a ROM hash.
///
/// A file that simply does not belong to a console is not an error; recipes
/// report that as `Ok(None)`.
#[derive(Debug, Error)]
pub enum HashError {
    /// I/O error while reading the ROM
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is too small to contain the header a recipe needs
    #[error("ROM too small: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: u64, actual: u64 },

    /// The ROM format is not recognized or is invalid
    #[error("Invalid ROM format: {0}")]
    InvalidFormat(String),
}

impl HashError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}
