//! Authenticated Encryption with Associated Data (AEAD)

pub mod gcm;

pub use gcm::{Aes128Gcm, Gcm};
