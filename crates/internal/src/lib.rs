//! Internal utilities for the aes128gcm workspace
//!
//! Nothing in this crate is part of the stable public API. It exists so that
//! the algorithm crate and the API crate share one implementation of the
//! constant-time and byte-order helpers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_xor};
