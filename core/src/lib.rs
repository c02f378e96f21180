//! configrules-core
//!
//! Codec for the config-rules container: a 10-byte header followed by a
//! DEFLATE payload, optionally AES-encrypted under a password-derived key.
//! No CLI, no logging setup; callers install a `tracing` subscriber if they
//! want the debug events.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

pub mod compression;
pub mod headers;
pub mod crypto;
pub mod version;

// Codec entry points
pub mod container;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::container::{
        decode, decode_container, decode_file, encode, encode_container, encode_file,
        inspect_container, inspect_file, CodecOptions, CodecSummary, DecodedContainer,
        EncodedContainer,
    };
    pub use crate::headers::ContainerHeader;
    pub use crate::types::{ConfigRulesError, ErrorKind, Result};
}
