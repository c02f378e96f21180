// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! Password-based key derivation for container payloads.
//!
//! Design:
//! - PBKDF2-HMAC-SHA1 over the UTF-8 password bytes.
//! - Salt and iteration count are fixed by the file format, so the same
//!   password always yields the same key.

use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

use crate::constants::kdf_params;
use crate::crypto::types::{CryptoError, KEY_LEN_16};

/// Derive a 16-byte key with caller-chosen salt and iteration count.
#[inline]
pub fn derive_key_with(
    password: &str,
    salt: &[u8],
    iterations: u32,
) -> Result<[u8; KEY_LEN_16], CryptoError> {
    if iterations == 0 {
        return Err(CryptoError::Failure("PBKDF2 iteration count must be non-zero".into()));
    }

    let mut key = [0u8; KEY_LEN_16];
    pbkdf2_hmac::<Sha1>(password.as_bytes(), salt, iterations, &mut key);
    Ok(key)
}

/// Derive the container key for `password` using the format's fixed parameters.
#[inline]
pub fn derive_key_16(password: &str) -> Result<[u8; KEY_LEN_16], CryptoError> {
    derive_key_with(password, &kdf_params::SALT, kdf_params::ITERATIONS)
}
