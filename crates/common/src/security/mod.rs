//! Security primitives and memory safety utilities
//!
//! Types in this module make sure round keys and intermediate keystream
//! blocks are wiped when they go out of scope.

pub mod memory;
pub mod secret;

pub use secret::{SecretBuffer, ZeroizeGuard};
