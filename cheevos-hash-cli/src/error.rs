use std::path::PathBuf;

use thiserror::Error;

use cheevos_hash_lib::HashError;

/// Errors that end a CLI run with a non-zero exit status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The ROM file could not be opened
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No file argument was given
    #[error("ERROR: missing argument.")]
    MissingArgument,

    /// Hashing failed (strict I/O only)
    #[error("{0}")]
    Hash(#[from] HashError),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the usage line should follow the message.
    pub(crate) fn shows_usage(&self) -> bool {
        matches!(self, Self::MissingArgument)
    }
}
