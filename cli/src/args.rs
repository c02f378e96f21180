use clap::Parser;
use std::path::PathBuf;

use configrules_core::constants::{DEFAULT_LEVEL_DEFLATE, MAX_LEVEL_DEFLATE};

/// configrules: pack and unpack config-rules containers
///
/// `c` compresses (and encrypts, when a password is given) a plaintext file
/// carrying a `// version: N` marker. `d` reverses it. `i` prints the header
/// of a container as JSON.
#[derive(Parser, Debug)]
#[command(name = "configrules")]
#[command(author, version, about = "Pack and unpack config-rules containers", long_about = None)]
#[command(override_usage = "configrules [OPTIONS] <OP> <INPUT> <OUTPUT> [PASSWORD]\n       configrules [OPTIONS] i <INPUT>")]
pub struct Cli {
    /// Operation: c (compress/encrypt), d (decrypt/decompress), i (inspect)
    pub op: Option<String>,

    /// Source file
    #[arg(allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// Destination file (not used by `i`)
    #[arg(allow_hyphen_values = true)]
    pub output: Option<PathBuf>,

    /// Password for the AES layer; empty or absent means no encryption.
    /// Taken verbatim even when it starts with `-`, so flags go before the
    /// operation.
    #[arg(env = "CONFIGRULES_PASSWORD", hide_env_values = true, allow_hyphen_values = true)]
    pub password: Option<String>,

    /// Log debug events to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run summary as JSON instead of a single line
    #[arg(long)]
    pub json: bool,

    /// DEFLATE level used by `c`
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LEVEL_DEFLATE,
        value_parser = clap::value_parser!(u32).range(0..=(MAX_LEVEL_DEFLATE as i64))
    )]
    pub level: u32,
}

/// The single-letter operations accepted as the first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Compress,
    Decompress,
    Inspect,
}

impl Operation {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "c" => Some(Operation::Compress),
            "d" => Some(Operation::Decompress),
            "i" => Some(Operation::Inspect),
            _ => None,
        }
    }
}
