// ## 📂 File: `src/headers/encode.rs`
//! src/headers/encode.rs
//!
//! Header encoding utilities.
//!
//! Design notes:
//! - Serializes `ContainerHeader` into a fixed 10-byte buffer, big-endian.
//! - Field order must match `decode.rs` exactly.

use byteorder::{BigEndian, ByteOrder};

use crate::headers::types::{ContainerHeader, HEADER_LEN_V1};

/// Serialize a `ContainerHeader` into a 10-byte buffer in big-endian order.
///
/// The header is written as given; call `validate()` first if the magic
/// may have been tampered with.
#[inline]
pub fn encode_header_be(h: &ContainerHeader) -> [u8; HEADER_LEN_V1] {
    let mut out = [0u8; HEADER_LEN_V1];

    out[0..2].copy_from_slice(&h.magic);                        // 0..2  magic
    BigEndian::write_i32(&mut out[2..6], h.version);            // 2..6  version
    BigEndian::write_i32(&mut out[6..10], h.uncompressed_size); // 6..10 uncompressed size

    out
}
