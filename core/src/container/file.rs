//! File-to-file entry points used by the CLI.

use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::container::decode::{decode_container, inspect_container};
use crate::container::encode::{encode_container, CodecOptions};
use crate::container::io::{read_input, write_output};
use crate::container::summary::{CodecSummary, Direction};
use crate::headers::ContainerHeader;
use crate::types::Result;

/// Read a plaintext source, encode it and write the container.
pub fn encode_file(
    input: &Path,
    output: &Path,
    password: &str,
    options: &CodecOptions,
) -> Result<CodecSummary> {
    let started = Instant::now();

    let plaintext = read_input(input)?;
    let container = encode_container(&plaintext, password, options)?;
    write_output(output, &container.bytes)?;

    info!(input = %input.display(), output = %output.display(), "container written");

    Ok(CodecSummary {
        direction: Direction::Encode,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        version: container.header.version,
        bytes_plaintext: plaintext.len() as u64,
        bytes_container: container.bytes.len() as u64,
        encrypted: container.encrypted,
        elapsed: started.elapsed(),
    })
}

/// Read a container, decode it and write the recovered plaintext.
pub fn decode_file(input: &Path, output: &Path, password: &str) -> Result<CodecSummary> {
    let started = Instant::now();

    let bytes = read_input(input)?;
    let decoded = decode_container(&bytes, password)?;
    write_output(output, &decoded.plaintext)?;

    info!(input = %input.display(), output = %output.display(), "plaintext written");

    Ok(CodecSummary {
        direction: Direction::Decode,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        version: decoded.header.version,
        bytes_plaintext: decoded.plaintext.len() as u64,
        bytes_container: bytes.len() as u64,
        encrypted: decoded.encrypted,
        elapsed: started.elapsed(),
    })
}

/// Read just the header of a container on disk.
pub fn inspect_file(input: &Path) -> Result<ContainerHeader> {
    let bytes = read_input(input)?;
    inspect_container(&bytes)
}
