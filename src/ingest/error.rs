//! Error type of the conversion entry points.

use thiserror::Error;

/// Errors that end a TDB conversion.
///
/// Parser failures keep their precise cause in [`Io`](Error::Io); the
/// remaining variants cover the caller's side of the contract.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller did not pass exactly one input file.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or parsing the TDB file failed.
    #[error(transparent)]
    Io(#[from] crate::io::Error),

    /// A configuration file could not be parsed.
    #[error("failed to parse ingest configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Creates an [`InvalidArgument`](Error::InvalidArgument) error for a
    /// file list of the wrong length.
    pub fn file_count(found: usize) -> Self {
        Self::InvalidArgument(format!("expected exactly one TDB file, got {found}"))
    }
}
