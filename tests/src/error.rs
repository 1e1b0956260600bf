//! Structured error types for vector loading

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("hex decode error in {field}: {source}")]
    Hex {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, VectorError>;
