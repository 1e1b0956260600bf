//! CLI error type

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between the command line and the cipher
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed
    #[error("{}: {}", .path.display(), .source)]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Writing to stdout failed
    #[error("stdout: {0}")]
    Stdout(#[source] io::Error),

    /// A hex argument or file did not decode
    #[error("invalid hex in {what}: {source}")]
    Hex {
        /// Which input was being decoded
        what: &'static str,
        /// Decoder error
        #[source]
        source: hex::FromHexError,
    },

    /// A decoded value had the wrong number of bytes
    #[error("{what} must be {expected} bytes, got {actual}")]
    Length {
        /// Which input was wrong
        what: &'static str,
        /// Required size
        expected: usize,
        /// Decoded size
        actual: usize,
    },

    /// Decrypt input carried no tag and none was given with `--tag`
    #[error("no tag: pass --tag or use a file written by encrypt")]
    MissingTag,

    /// PKCS#7 padding was missing or malformed after decryption
    #[error("invalid PKCS#7 padding")]
    Padding,

    /// The cipher rejected the input
    #[error(transparent)]
    Crypto(#[from] aes128gcm::api::Error),
}

/// CLI result type
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}
