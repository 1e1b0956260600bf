//! Constant values for aes128gcm cryptographic operations
//!
//! This library provides the sizes and limits shared by the algorithm, API
//! and command-line crates.

#![no_std]

pub mod utils;

pub use utils::symmetric::*;
