// ## src/container/summary.rs

//! Per-run summary of a file encode/decode.
//!
//! `Display` renders the one-line human summary; `Serialize` backs the
//! CLI's `--json` output.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodecSummary {
    pub direction: Direction,
    pub input: PathBuf,
    pub output: PathBuf,
    pub version: i32,
    pub bytes_plaintext: u64,
    pub bytes_container: u64,
    pub encrypted: bool,
    pub elapsed: Duration,
}

impl CodecSummary {
    /// Container size relative to plaintext; 0.0 for an empty plaintext.
    pub fn ratio(&self) -> f64 {
        if self.bytes_plaintext > 0 {
            self.bytes_container as f64 / self.bytes_plaintext as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for CodecSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (verb, src_len, dst_len) = match self.direction {
            Direction::Encode => ("Encoded", self.bytes_plaintext, self.bytes_container),
            Direction::Decode => ("Decoded", self.bytes_container, self.bytes_plaintext),
        };
        write!(
            f,
            "{} {} ({} bytes) -> {} ({} bytes), version {}, {}, ratio {:.2}",
            verb,
            self.input.display(),
            src_len,
            self.output.display(),
            dst_len,
            self.version,
            if self.encrypted { "encrypted" } else { "not encrypted" },
            self.ratio(),
        )
    }
}
