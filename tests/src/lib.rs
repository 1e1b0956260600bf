//! Test vectors and helpers for the aes128gcm workspace
pub mod error;
pub mod vectors;

pub use error::{Result, VectorError};
