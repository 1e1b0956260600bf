//! AES-128-GCM primitives
//!
//! This crate holds the building blocks of AES-128-GCM: the AES-128 key
//! schedule and forward block transform, GCM counter mode, the GHASH
//! authenticator over GF(2^128), and the GCM composition that ties them
//! together. It is usable in both `std` and `no_std` environments; the
//! `Vec`-returning convenience methods need the `alloc` feature.
//!
//! # Security Features
//!
//! - Round keys, hash subkeys and keystream buffers are zeroized on drop
//! - Tags are compared in constant time
//! - Decryption never releases plaintext for an unauthenticated input

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Nonce, tag and secret wrappers
pub mod types;
pub use types::{Nonce, SecretBytes, Tag};

// AES-128 and counter mode
pub mod block;
pub use block::{Aes128, BlockCipher, CounterBlock, Ctr};

// GCM and GHASH
pub mod aead;
pub use aead::gcm::{gf_multiply, process_ghash, GHash};
pub use aead::{Aes128Gcm, Gcm};
