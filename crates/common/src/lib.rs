//! Common implementations and shared functionality for the aes128gcm library
//!
//! This crate holds the containers used for expanded key material and the
//! compiler barriers placed around secret-dependent table lookups.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, ZeroizeGuard};

// Re-export memory barrier utilities
pub use security::memory::barrier;
