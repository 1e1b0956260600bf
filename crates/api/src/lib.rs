//! Public API traits and types for the aes128gcm library
//!
//! This crate defines the error type returned by the public entry points,
//! the secret byte container used for keys, and the trait implemented by
//! authenticated ciphers.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::AuthenticatedCipher;
pub use types::SecretBytes;
