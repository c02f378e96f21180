// ## 📂 File: `src/container/decode.rs`
//! src/container/decode.rs
//!
//! Container -> plaintext.
//!
//! Pipeline: header -> (AES-ECB if password) -> bounded inflate -> size check.

use tracing::debug;

use crate::compression::DeflateDecompressor;
use crate::crypto::{decrypt_ecb, derive_key_16};
use crate::headers::{decode_header_be, split_container, ContainerHeader};
use crate::types::Result;

#[derive(Debug, Clone)]
pub struct DecodedContainer {
    pub header: ContainerHeader,
    pub plaintext: Vec<u8>,
    /// Bytes following the header, as stored.
    pub payload_len: usize,
    pub encrypted: bool,
}

/// Recover the plaintext from `bytes`. The password must match the one used
/// to encode, including being empty for unencrypted containers.
pub fn decode_container(bytes: &[u8], password: &str) -> Result<DecodedContainer> {
    let (header, payload) = split_container(bytes)?;

    let encrypted = !password.is_empty();
    let decrypted;
    let compressed = if encrypted {
        let key = derive_key_16(password)?;
        decrypted = decrypt_ecb(&key, payload)?;
        decrypted.as_slice()
    } else {
        payload
    };

    let plaintext = DeflateDecompressor::new().decompress(compressed, header.uncompressed_size)?;

    debug!(
        version = header.version,
        container = bytes.len(),
        plaintext = plaintext.len(),
        encrypted,
        "decoded container"
    );

    Ok(DecodedContainer { header, plaintext, payload_len: payload.len(), encrypted })
}

/// Decode returning just the plaintext.
pub fn decode(bytes: &[u8], password: &str) -> Result<Vec<u8>> {
    decode_container(bytes, password).map(|c| c.plaintext)
}

/// Read and validate only the header; the payload is not touched.
pub fn inspect_container(bytes: &[u8]) -> Result<ContainerHeader> {
    Ok(decode_header_be(bytes)?)
}
