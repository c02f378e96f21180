//! Deflate (zlib wrapper) via flate2.
//!
//! The container stores a single zlib stream; there is no per-chunk framing,
//! the expected length lives in the container header instead.

use std::io::{Read, Write};
use flate2::{Compression, write::ZlibEncoder, read::ZlibDecoder};

use crate::constants::{DEFAULT_LEVEL_DEFLATE, MAX_LEVEL_DEFLATE};
use crate::compression::types::CompressionError;

pub struct DeflateCompressor {
    level: Compression,
}

impl Default for DeflateCompressor {
    fn default() -> Self {
        Self { level: Compression::new(DEFAULT_LEVEL_DEFLATE) }
    }
}

impl DeflateCompressor {
    pub fn new(level: u32) -> Result<Self, CompressionError> {
        if level > MAX_LEVEL_DEFLATE {
            return Err(CompressionError::InvalidLevel { have: level, max: MAX_LEVEL_DEFLATE });
        }
        Ok(Self { level: Compression::new(level) })
    }

    pub fn level(&self) -> u32 {
        self.level.level()
    }

    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut enc = ZlibEncoder::new(Vec::with_capacity(input.len() / 2 + 16), self.level);
        enc.write_all(input)?;
        Ok(enc.finish()?)
    }
}

pub struct DeflateDecompressor;

impl DeflateDecompressor {
    pub fn new() -> Self {
        Self
    }

    /// Inflate `input`, requiring exactly `declared` bytes of output.
    ///
    /// At most `declared + 1` bytes are ever materialized, so a stream that
    /// expands past the declared size is rejected without inflating it fully.
    pub fn decompress(&self, input: &[u8], declared: i32) -> Result<Vec<u8>, CompressionError> {
        let expected = usize::try_from(declared)
            .map_err(|_| CompressionError::NegativeSize { declared })?;

        let mut dec = ZlibDecoder::new(input).take(expected as u64 + 1);
        // The header is untrusted; don't let it pick the allocation size.
        let mut decompressed = Vec::with_capacity(expected.min(input.len().saturating_mul(4)));
        dec.read_to_end(&mut decompressed)?;

        if decompressed.len() != expected {
            return Err(CompressionError::SizeMismatch { declared: expected, actual: decompressed.len() });
        }

        Ok(decompressed)
    }
}

impl Default for DeflateDecompressor {
    fn default() -> Self {
        Self::new()
    }
}
