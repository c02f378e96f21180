use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::{
    compression::CompressionError,
    crypto::CryptoError,
    headers::HeaderError,
    version::VersionError,
};

/// Unified codec error covering file I/O, format, crypto and integrity failures.
/// - `From<T>` impls enable `?` across the codec.
/// - `kind()` collapses the detail into the coarse categories callers act on.
#[derive(Debug, Error)]
pub enum ConfigRulesError {
    #[error("cannot read {}: {source}", .path.display())]
    FileRead { path: PathBuf, #[source] source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    FileWrite { path: PathBuf, #[source] source: io::Error },

    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    #[error("version error: {0}")]
    Version(#[from] VersionError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),
}

/// Coarse error category, one per failure class of a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-supplied options are out of range.
    Usage,
    FileRead,
    /// Missing/invalid version marker, bad magic, truncated header.
    Format,
    /// Key derivation or cipher failure.
    Crypto,
    /// Inflate failure or size mismatch.
    Integrity,
    FileWrite,
}

impl ErrorKind {
    /// Process exit status for this kind of failure.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Usage => 2,
            ErrorKind::FileRead => 3,
            ErrorKind::Format => 4,
            ErrorKind::Crypto => 5,
            ErrorKind::Integrity => 6,
            ErrorKind::FileWrite => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Usage => "usage",
            ErrorKind::FileRead => "file-read",
            ErrorKind::Format => "format",
            ErrorKind::Crypto => "crypto",
            ErrorKind::Integrity => "integrity",
            ErrorKind::FileWrite => "file-write",
        }
    }
}

impl ConfigRulesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigRulesError::FileRead { .. } => ErrorKind::FileRead,
            ConfigRulesError::FileWrite { .. } => ErrorKind::FileWrite,
            ConfigRulesError::Header(_) | ConfigRulesError::Version(_) => ErrorKind::Format,
            ConfigRulesError::Crypto(_) => ErrorKind::Crypto,
            ConfigRulesError::Compression(CompressionError::InvalidLevel { .. }) => ErrorKind::Usage,
            ConfigRulesError::Compression(_) => ErrorKind::Integrity,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigRulesError>;
