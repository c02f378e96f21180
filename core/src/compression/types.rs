use std::fmt;

#[derive(Debug)]
pub enum CompressionError {
    /// Requested level outside 0..=9.
    InvalidLevel { have: u32, max: u32 },
    /// The underlying zlib stream failed (corrupt input, I/O on the sink).
    CodecProcessFailed { codec: String, msg: String },
    /// Header declares a negative plaintext length.
    NegativeSize { declared: i32 },
    /// Inflated length differs from what the header declares.
    SizeMismatch { declared: usize, actual: usize },
}

impl From<std::io::Error> for CompressionError {
    fn from(e: std::io::Error) -> Self {
        CompressionError::CodecProcessFailed { codec: "deflate".into(), msg: e.to_string() }
    }
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompressionError::*;
        match self {
            InvalidLevel { have, max } =>
                write!(f, "invalid compression level: {} > {}", have, max),
            CodecProcessFailed { codec, msg } =>
                write!(f, "codec {} process failed: {}", codec, msg),
            NegativeSize { declared } =>
                write!(f, "declared uncompressed size is negative: {}", declared),
            SizeMismatch { declared, actual } =>
                write!(f, "decoded size {} != declared {}", actual, declared),
        }
    }
}

impl std::error::Error for CompressionError {}
