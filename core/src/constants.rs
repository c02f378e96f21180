//! constants.rs
//! Wire constants for the config-rules container.

/// Container signature, first two bytes of every file.
pub const MAGIC_CR: [u8; 2] = [0x39, 0xD8];

/// Fixed header size: magic (2) + version (4) + uncompressed size (4).
pub const HEADER_LEN: usize = 10;

/// Marker the plaintext must carry to declare its version.
pub const VERSION_MARKER: &[u8] = b"// version:";

/// Only this many leading bytes are scanned for `VERSION_MARKER`.
pub const VERSION_SCAN_LIMIT: usize = 80;

/// Default DEFLATE level (flate2 `Compression::default()`).
pub const DEFAULT_LEVEL_DEFLATE: u32 = 6;
/// Highest accepted DEFLATE level.
pub const MAX_LEVEL_DEFLATE: u32 = 9;

/// Key derivation parameters. Fixed by the file format; changing any of
/// these makes previously written containers undecryptable.
pub mod kdf_params {
    pub const SALT: [u8; 8] = [0x23, 0x71, 0xD3, 0xA3, 0x30, 0x71, 0x63, 0xE3];
    pub const ITERATIONS: u32 = 1000;
}

/// AES-128 key length in bytes.
pub const KEY_LEN_16: usize = 16;

/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;
