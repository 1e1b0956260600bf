//! Type-safe wrappers for cryptographic types
//!
//! Nonces and tags carry their size in the type, so a 12-byte GCM nonce
//! cannot be confused with a 16-byte tag at a call site.

pub mod nonce;
pub mod tag;

// Sealed trait module (not public)
pub(crate) mod sealed;

pub use nonce::{AesGcmCompatible, Nonce};
pub use tag::Tag;

pub use aes128gcm_api::types::SecretBytes;
pub use aes128gcm_common::security::{SecretBuffer, ZeroizeGuard};

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
