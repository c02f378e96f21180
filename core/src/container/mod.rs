//! container/mod.rs
//! The config-rules container codec.
//!
//! Layout on disk:
//!
//! ```text
//! +-------+---------+-------------------+---------------------------------+
//! | magic | version | uncompressed size | payload                         |
//! | 2 B   | i32 BE  | i32 BE            | zlib stream, AES-128-ECB if pw  |
//! +-------+---------+-------------------+---------------------------------+
//! ```
//!
//! Everything is processed in memory; inputs are small configuration files.

pub mod encode;
pub mod decode;
pub mod io;
pub mod summary;
pub mod file;

pub use encode::*;
pub use decode::*;
pub use summary::*;
pub use file::*;
