// ## 📂 File: `src/container/encode.rs`
//! src/container/encode.rs
//!
//! Plaintext -> container.
//!
//! Pipeline: version marker -> deflate -> (AES-ECB if password) -> header + payload.

use tracing::debug;

use crate::compression::DeflateCompressor;
use crate::constants::DEFAULT_LEVEL_DEFLATE;
use crate::crypto::{derive_key_16, encrypt_ecb};
use crate::headers::{encode_header_be, ContainerHeader, HeaderError};
use crate::types::Result;
use crate::version::parse_version_marker;

/// Knobs for the encode side. Decoding needs none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// DEFLATE level, 0..=9.
    pub level: u32,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self { level: DEFAULT_LEVEL_DEFLATE }
    }
}

impl CodecOptions {
    pub fn with_level(level: u32) -> Result<Self> {
        DeflateCompressor::new(level)?;
        Ok(Self { level })
    }
}

/// A fully assembled container plus what went into it.
#[derive(Debug, Clone)]
pub struct EncodedContainer {
    pub header: ContainerHeader,
    /// Header followed by payload, ready to be written out.
    pub bytes: Vec<u8>,
    /// Length of the zlib stream before encryption.
    pub compressed_len: usize,
    pub encrypted: bool,
}

impl EncodedContainer {
    pub fn payload(&self) -> &[u8] {
        &self.bytes[ContainerHeader::LEN..]
    }
}

/// Build a container from `input`. An empty `password` leaves the payload unencrypted.
pub fn encode_container(
    input: &[u8],
    password: &str,
    options: &CodecOptions,
) -> Result<EncodedContainer> {
    let version = parse_version_marker(input)?;
    let uncompressed_size = i32::try_from(input.len())
        .map_err(|_| HeaderError::SizeOverflow { have: input.len() })?;

    let compressed = DeflateCompressor::new(options.level)?.compress(input)?;
    let compressed_len = compressed.len();

    let encrypted = !password.is_empty();
    let payload = if encrypted {
        let key = derive_key_16(password)?;
        encrypt_ecb(&key, &compressed)?
    } else {
        compressed
    };

    let header = ContainerHeader::new(version, uncompressed_size);

    let mut bytes = Vec::with_capacity(ContainerHeader::LEN + payload.len());
    bytes.extend_from_slice(&encode_header_be(&header));
    bytes.extend_from_slice(&payload);

    debug!(
        version,
        plaintext = input.len(),
        compressed = compressed_len,
        container = bytes.len(),
        encrypted,
        "encoded container"
    );

    Ok(EncodedContainer { header, bytes, compressed_len, encrypted })
}

/// Encode with default options, returning just the container bytes.
pub fn encode(input: &[u8], password: &str) -> Result<Vec<u8>> {
    encode_container(input, password, &CodecOptions::default()).map(|c| c.bytes)
}
