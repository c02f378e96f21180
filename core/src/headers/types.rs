// ## 📂 File: `src/headers/types.rs`

//! headers/types.rs
//! Container header struct and its error type.
//!
//! Layout notes:
//! - 10 bytes, fixed length, big-endian multi-byte fields.
//! - Version and size are signed 32-bit on the wire; readers must not assume
//!   they are non-negative.

use std::fmt;
use serde::Serialize;

use crate::constants::{HEADER_LEN, MAGIC_CR};

/// Fixed header size in bytes.
pub const HEADER_LEN_V1: usize = HEADER_LEN;

/// Header at the front of every container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainerHeader {
    #[serde(serialize_with = "serialize_magic")]
    pub magic: [u8; 2],        // 0x39 0xD8
    pub version: i32,          // from the `// version:` marker
    pub uncompressed_size: i32, // plaintext length in bytes
}

fn serialize_magic<S: serde::Serializer>(magic: &[u8; 2], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&hex::encode(magic))
}

impl ContainerHeader {
    pub const LEN: usize = HEADER_LEN_V1;

    pub fn new(version: i32, uncompressed_size: i32) -> Self {
        Self { magic: MAGIC_CR, version, uncompressed_size }
    }

    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != MAGIC_CR {
            return Err(HeaderError::InvalidMagic { have: self.magic, need: MAGIC_CR });
        }
        Ok(())
    }
}

pub fn fmt_bytes(b: &[u8]) -> String {
    format!("0x{}", hex::encode(b))
}

#[derive(Debug)]
pub enum HeaderError {
    /// Buffer too short to contain a header.
    BufferTooShort { have: usize, need: usize },

    /// Leading signature is not 0x39 0xD8.
    InvalidMagic { have: [u8; 2], need: [u8; 2] },

    /// Plaintext is too large for the signed 32-bit size field.
    SizeOverflow { have: usize },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            BufferTooShort { have, need } =>
                write!(f, "header buffer too short: {} < {}", have, need),
            InvalidMagic { have, need } =>
                write!(f, "invalid magic: expected {}, got {}", fmt_bytes(need), fmt_bytes(have)),
            SizeOverflow { have } =>
                write!(f, "plaintext of {} bytes does not fit the header size field", have),
        }
    }
}

impl std::error::Error for HeaderError {}
