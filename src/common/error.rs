use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures while creating or reading key files.
#[derive(Debug, Error)]
pub enum KeygenError {
    /// A destination was empty or both destinations named the same file.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The destination already exists and will not be overwritten.
    #[error("file already exists: {}", path.display())]
    FileAlreadyExists { path: PathBuf },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The RSA backend could not generate or encode a key. Not expected on a
    /// working system.
    #[error("illegal state: {0}")]
    IllegalState(String),
    #[error("{} is not a valid RSA PEM key: {reason}", path.display())]
    InvalidKey { path: PathBuf, reason: String },
    /// A file created by a failed call could not be removed again.
    #[error("{cause}; removing {} also failed: {source}", path.display())]
    RollbackFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
        cause: Box<KeygenError>,
    },
}

pub type Result<T> = std::result::Result<T, KeygenError>;

impl KeygenError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
