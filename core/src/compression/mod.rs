//! compression/mod.rs
//! Whole-buffer DEFLATE compression and bounded inflation.

pub mod types;
pub mod deflate;

pub use types::*;
pub use deflate::*;
