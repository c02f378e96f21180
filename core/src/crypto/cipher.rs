// ## 📂 File: `src/crypto/cipher.rs`

//! src/crypto/cipher.rs
//! AES-128 in ECB mode with PKCS#7 padding.
//!
//! Design notes:
//! - Matches the platform-default `"AES"` transform the container format was
//!   defined against: no IV, no authentication tag.
//! - ECB leaks equal plaintext blocks and the ciphertext is deterministic per
//!   key. Kept for compatibility with existing containers; do not reuse for
//!   anything new.
//! - A wrong key is only detected by the padding check (and later by inflate).

use aes::Aes128;
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};

use crate::crypto::types::{CryptoError, BLOCK_LEN, KEY_LEN_16};

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;

/// Encrypt `plaintext`; output is padded up to the next whole block.
pub fn encrypt_ecb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes128EcbEnc::new_from_slice(key)
        .map_err(|_| CryptoError::InvalidKeyLen { expected: KEY_LEN_16, actual: key.len() })?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt `ciphertext` and strip its padding.
pub fn decrypt_ecb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes128EcbDec::new_from_slice(key)
        .map_err(|_| CryptoError::InvalidKeyLen { expected: KEY_LEN_16, actual: key.len() })?;

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::UnalignedCiphertext { len: ciphertext.len(), block: BLOCK_LEN });
    }

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::BadPadding)
}
