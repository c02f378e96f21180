// # 📂 src/container/io.rs

//! Whole-file reads and writes with path context on failure.
//!
//! Outputs are only written once the in-memory operation succeeded, so a
//! failed run never leaves a file that looks complete.

use std::fs;
use std::path::Path;

use crate::types::{ConfigRulesError, Result};

pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| ConfigRulesError::FileRead { path: path.to_path_buf(), source })
}

pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| ConfigRulesError::FileWrite { path: path.to_path_buf(), source })
}
