//! Traits implemented by the ciphers in this workspace

use crate::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// An authenticated cipher bound to one key and one nonce
///
/// `seal` returns the ciphertext followed by the authentication tag and
/// `open` consumes the same layout. Implementations must not release any
/// plaintext unless the tag verifies.
pub trait AuthenticatedCipher {
    /// Key size in bytes
    const KEY_SIZE: usize;
    /// Nonce size in bytes
    const NONCE_SIZE: usize;
    /// Tag size in bytes
    const TAG_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;

    /// Encrypt `plaintext` and append the tag
    #[cfg(feature = "alloc")]
    fn seal(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Verify the trailing tag and decrypt the rest
    #[cfg(feature = "alloc")]
    fn open(&self, sealed: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>>;
}
