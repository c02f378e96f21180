// ## 📂 File: `src/headers/decode.rs`
//! src/headers/decode.rs
//!
//! Header decoding utilities.
//!
//! Design notes:
//! - Reads the first 10 bytes of a container into a `ContainerHeader`.
//! - Field order must match `encode.rs` exactly.
//! - Magic is validated here; version and size are returned as found.

use byteorder::{BigEndian, ByteOrder};

use crate::headers::types::{ContainerHeader, HeaderError};

/// Deserialize the leading 10 bytes of `buf` into a `ContainerHeader`.
///
/// # Returns
/// - `Ok(ContainerHeader)` when the buffer is long enough and the magic matches.
/// - `Err(HeaderError::BufferTooShort)` for fewer than 10 bytes.
/// - `Err(HeaderError::InvalidMagic)` when the signature differs.
#[inline]
pub fn decode_header_be(buf: &[u8]) -> Result<ContainerHeader, HeaderError> {
    if buf.len() < ContainerHeader::LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: ContainerHeader::LEN });
    }

    let h = ContainerHeader {
        magic: [buf[0], buf[1]],                            // 0..2
        version: BigEndian::read_i32(&buf[2..6]),           // 2..6
        uncompressed_size: BigEndian::read_i32(&buf[6..10]), // 6..10
    };

    h.validate()?;

    Ok(h)
}

/// Split a container into its decoded header and the payload that follows.
pub fn split_container(buf: &[u8]) -> Result<(ContainerHeader, &[u8]), HeaderError> {
    let header = decode_header_be(buf)?;
    Ok((header, &buf[ContainerHeader::LEN..]))
}
