//! version.rs
//! Extraction of the `// version: N` marker from plaintext sources.
//!
//! Only the first `VERSION_SCAN_LIMIT` bytes are inspected. The number runs
//! from just after the marker to the end of that line (or the end of the scan
//! window) and is parsed as a signed 32-bit integer after trimming.

use std::fmt;

use crate::constants::{VERSION_MARKER, VERSION_SCAN_LIMIT};

#[derive(Debug, PartialEq, Eq)]
pub enum VersionError {
    /// No `// version:` marker within the scan window.
    MissingMarker { scanned: usize },

    /// Marker present but the value is not an i32.
    InvalidNumber { raw: String },
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionError::MissingMarker { scanned } =>
                write!(f, "no \"// version:\" marker in the first {} bytes", scanned),
            VersionError::InvalidNumber { raw } =>
                write!(f, "invalid version number: {:?}", raw),
        }
    }
}

impl std::error::Error for VersionError {}

/// Parse the version declared by the `// version:` marker.
pub fn parse_version_marker(input: &[u8]) -> Result<i32, VersionError> {
    let window = &input[..input.len().min(VERSION_SCAN_LIMIT)];

    let start = window
        .windows(VERSION_MARKER.len())
        .position(|w| w == VERSION_MARKER)
        .map(|pos| pos + VERSION_MARKER.len())
        .ok_or(VersionError::MissingMarker { scanned: window.len() })?;

    let rest = &window[start..];
    let end = rest
        .iter()
        .position(|&b| b == b'\n' || b == b'\r')
        .unwrap_or(rest.len());

    let raw = String::from_utf8_lossy(&rest[..end]);
    raw.trim()
        .parse::<i32>()
        .map_err(|_| VersionError::InvalidNumber { raw: raw.trim().to_string() })
}
