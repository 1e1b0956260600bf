//! Hex decoding for keys, IVs, tags and ciphertext files

use std::fs;
use std::path::Path;

use aes128gcm::params::AES128_KEY_SIZE;

use super::error::{CliError, Result};

/// Decode `text` as hex after dropping all whitespace
pub fn decode_hex(what: &'static str, text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact).map_err(|source| CliError::Hex { what, source })
}

/// Decode `text` as exactly `N` hex-encoded bytes
pub fn decode_hex_array<const N: usize>(what: &'static str, text: &str) -> Result<[u8; N]> {
    let bytes = decode_hex(what, text)?;
    bytes.as_slice().try_into().map_err(|_| CliError::Length {
        what,
        expected: N,
        actual: bytes.len(),
    })
}

/// Parse key file contents: the first 32 hex characters are the key
///
/// Anything after the key (a trailing newline, a comment) is ignored.
pub fn parse_key(text: &str) -> Result<[u8; AES128_KEY_SIZE]> {
    let digits: String = text
        .trim_start()
        .chars()
        .take(AES128_KEY_SIZE * 2)
        .collect();
    if digits.len() < AES128_KEY_SIZE * 2 {
        return Err(CliError::Length {
            what: "key",
            expected: AES128_KEY_SIZE,
            actual: digits.len() / 2,
        });
    }
    decode_hex_array("key", &digits)
}

/// Load the key from `path`, or fall back to the all-zero key
pub fn load_key(path: Option<&Path>) -> Result<[u8; AES128_KEY_SIZE]> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
            log::debug!("Loaded key from {}", path.display());
            parse_key(&text)
        }
        None => {
            log::warn!("No key file given; using the all-zero key");
            Ok([0u8; AES128_KEY_SIZE])
        }
    }
}
