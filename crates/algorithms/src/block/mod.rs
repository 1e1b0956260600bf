//! Block cipher primitives
//!
//! Only the forward direction is provided: GCM runs the cipher in counter
//! mode for both encryption and decryption.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

pub mod aes;
pub mod modes;

pub use aes::Aes128;
pub use modes::ctr::{CounterBlock, Ctr};

/// A single 128-bit cipher block
pub type Block = [u8; 16];

/// Type-level constants for a block cipher
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;
}

/// A 128-bit block cipher usable underneath counter mode and GHASH
pub trait BlockCipher: Zeroize {
    /// Marker type carrying the algorithm constants
    type Algorithm: CipherAlgorithm;
    /// Key type accepted by [`BlockCipher::new`]
    type Key;

    /// Expand `key` into a ready-to-use cipher instance
    fn new(key: &Self::Key) -> Self;

    /// Encrypt one block, returning the result and leaving the input untouched
    fn encrypt_block(&self, block: &Block) -> Block;

    /// Block size in bytes
    fn block_size() -> usize {
        <Self::Algorithm as CipherAlgorithm>::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        <Self::Algorithm as CipherAlgorithm>::name()
    }

    /// Generate a fresh random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
