//! headers/mod.rs
//! Public module export for the container header.
//!
//! Notes:
//! - Fixed-size header (10 bytes) so the payload offset never depends on content.
//! - Big-endian across all multi-byte integers.
//! - No checksum or flags: whether the payload is encrypted is not recorded,
//!   the reader has to know the password (or that there is none).

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
