//! # aes128gcm
//!
//! AES-128 in Galois/Counter Mode, implemented from NIST SP 800-38D and
//! FIPS-197 without FFI or external AES implementations.
//!
//! ## Usage
//!
//! ```
//! let key = [0u8; 16];
//! let iv = [0u8; 12];
//!
//! let (ciphertext, tag) = aes128gcm::encrypt(b"hello", &key, &iv, b"header")?;
//! let plaintext = aes128gcm::decrypt(&ciphertext, &key, &iv, b"header", &tag)?;
//! assert_eq!(plaintext, b"hello");
//! # Ok::<(), aes128gcm::api::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`aes128gcm-api`]: Error type, `SecretBytes` and the `AuthenticatedCipher` trait
//! - [`aes128gcm-algorithms`]: Key schedule, block transform, GHASH, counter mode and GCM
//! - [`aes128gcm-common`]: Zeroizing buffers and memory barriers
//! - [`aes128gcm-internal`]: Constant-time and endianness helpers
//! - [`aes128gcm-params`]: Size constants

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

pub use aes128gcm_algorithms as algorithms;
pub use aes128gcm_api as api;
pub use aes128gcm_common as common;
pub use aes128gcm_internal as internal;
pub use aes128gcm_params as params;

use aes128gcm_algorithms::error::to_core_result;
use aes128gcm_algorithms::{Aes128, Aes128Gcm, Gcm, Nonce, Tag};
use aes128gcm_api::Result;
use aes128gcm_params::{AES128_KEY_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE};

/// Common imports for aes128gcm users
pub mod prelude {
    pub use crate::api::{AuthenticatedCipher, Error, Result, ResultExt, SecretBytes};
    pub use crate::algorithms::{Aes128, Aes128Gcm, BlockCipher, Gcm, Nonce, Tag};
    pub use crate::common::{SecretBuffer, ZeroizeGuard};
}

fn instance(key: &[u8; AES128_KEY_SIZE], iv: &[u8; GCM_NONCE_SIZE]) -> Result<Aes128Gcm> {
    let nonce = Nonce::<GCM_NONCE_SIZE>::new(*iv);
    to_core_result(Gcm::new(Aes128::from_key_bytes(key), &nonce), "aes128gcm")
}

/// Encrypt `plaintext` and authenticate it together with `aad`
///
/// Returns the ciphertext, which has the same length as the plaintext, and
/// the 16-byte tag.
#[cfg(feature = "alloc")]
pub fn encrypt(
    plaintext: &[u8],
    key: &[u8; AES128_KEY_SIZE],
    iv: &[u8; GCM_NONCE_SIZE],
    aad: &[u8],
) -> Result<(Vec<u8>, [u8; GCM_TAG_SIZE])> {
    let gcm = instance(key, iv)?;
    let (ciphertext, tag) =
        to_core_result(gcm.encrypt_detached(plaintext, Some(aad)), "aes128gcm::encrypt")?;
    Ok((ciphertext, tag.into_bytes()))
}

/// Verify `tag` over `ciphertext` and `aad`, then decrypt
///
/// Fails with [`api::Error::AuthenticationFailed`] and no plaintext if the
/// tag does not match.
#[cfg(feature = "alloc")]
pub fn decrypt(
    ciphertext: &[u8],
    key: &[u8; AES128_KEY_SIZE],
    iv: &[u8; GCM_NONCE_SIZE],
    aad: &[u8],
    tag: &[u8; GCM_TAG_SIZE],
) -> Result<Vec<u8>> {
    let gcm = instance(key, iv)?;
    to_core_result(
        gcm.decrypt_detached(ciphertext, Some(aad), &Tag::new(*tag)),
        "aes128gcm::decrypt",
    )
}
