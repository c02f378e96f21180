// ## 📂 File: `src/crypto/types.rs`

use std::fmt;

pub use crate::constants::{BLOCK_LEN, KEY_LEN_16};

#[derive(Debug)]
pub enum CryptoError {
    /// Invalid key length provided to cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Ciphertext length is not a whole number of AES blocks.
    UnalignedCiphertext { len: usize, block: usize },

    /// PKCS#7 padding did not verify; almost always a wrong password.
    BadPadding,

    /// General derivation or runtime error with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            UnalignedCiphertext { len, block } =>
                write!(f, "ciphertext length {} is not a multiple of {}", len, block),
            BadPadding =>
                write!(f, "padding check failed (wrong password?)"),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
