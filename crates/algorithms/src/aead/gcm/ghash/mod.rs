//! GHASH: the GCM polynomial authenticator over GF(2^128)
//!
//! Field elements use the GCM bit order: the most significant bit of byte 0
//! is the coefficient of x^0. The reduction polynomial is
//! x^128 + x^7 + x^2 + x + 1, which in this order becomes the constant
//! `0xE1` followed by fifteen zero bytes.

use aes128gcm_params::utils::symmetric::GHASH_BLOCK_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::auth_input::AuthenticatorInput;
use crate::block::Block;
use crate::error::{validate, Result};

/// Reduction constant R = 11100001 ‖ 0^120
const R: u128 = 0xE1 << 120;

/// Multiply two field elements
///
/// Fixed 128 iterations; bit selection and reduction use masks rather than
/// branches.
pub fn gf_multiply(x: &Block, y: &Block) -> Block {
    let x = u128::from_be_bytes(*x);
    let mut v = u128::from_be_bytes(*y);
    let mut z = 0u128;

    for i in 0..128 {
        let bit = (x >> (127 - i)) & 1;
        z ^= v & bit.wrapping_neg();

        let lsb = v & 1;
        v = (v >> 1) ^ (R & lsb.wrapping_neg());
    }

    z.to_be_bytes()
}

/// Running GHASH state for one hash subkey
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GHash {
    h: Block,
    y: Block,
}

impl GHash {
    /// Start a new fold under hash subkey `h`
    pub fn new(h: &Block) -> Self {
        Self {
            h: *h,
            y: [0u8; GHASH_BLOCK_SIZE],
        }
    }

    /// Fold one block: Y = (Y ⊕ block) · H
    pub fn update_block(&mut self, block: &Block) {
        for (y, b) in self.y.iter_mut().zip(block) {
            *y ^= b;
        }
        self.y = gf_multiply(&self.y, &self.h);
    }

    /// Fold a byte string whose length is a multiple of 16
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        validate::length(
            "GHASH input remainder",
            data.len() % GHASH_BLOCK_SIZE,
            0,
        )?;

        for chunk in data.chunks_exact(GHASH_BLOCK_SIZE) {
            let mut block = [0u8; GHASH_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.update_block(&block);
        }
        Ok(())
    }

    /// Current accumulator value
    pub fn finalize(self) -> Block {
        self.y
    }
}

/// GHASH over an input already laid out in 16-byte blocks
pub fn ghash(h: &Block, input: &[u8]) -> Result<Block> {
    let mut state = GHash::new(h);
    state.update(input)?;
    Ok(state.finalize())
}

/// GHASH over the GCM authenticator input built from `aad` and `ciphertext`
pub fn process_ghash(h: &Block, aad: &[u8], ciphertext: &[u8]) -> Block {
    let mut state = GHash::new(h);
    for block in AuthenticatorInput::new(aad, ciphertext).blocks() {
        state.update_block(&block);
    }
    state.finalize()
}
