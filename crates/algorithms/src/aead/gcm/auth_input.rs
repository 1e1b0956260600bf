//! GCM authenticator input builder
//!
//! Lays out `AAD ‖ pad ‖ C ‖ pad ‖ [len(A)]64 ‖ [len(C)]64` as a sequence of
//! 16-byte blocks. Lengths are in bits, big-endian, modulo 2^64.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use aes128gcm_internal::endian::u64_to_be_bytes;
use aes128gcm_params::utils::symmetric::GHASH_BLOCK_SIZE;

use crate::block::Block;

/// Length of `len` bytes after zero-padding to a block boundary
#[inline]
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(GHASH_BLOCK_SIZE) * GHASH_BLOCK_SIZE
}

/// Copy up to 16 bytes into a zero-filled block
#[inline]
fn pad_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; GHASH_BLOCK_SIZE];
    block[..chunk.len()].copy_from_slice(chunk);
    block
}

/// Borrowed view of the two authenticated byte strings
#[derive(Clone, Copy, Debug)]
pub struct AuthenticatorInput<'a> {
    aad: &'a [u8],
    ciphertext: &'a [u8],
}

impl<'a> AuthenticatorInput<'a> {
    /// Pair `aad` with `ciphertext`
    pub fn new(aad: &'a [u8], ciphertext: &'a [u8]) -> Self {
        Self { aad, ciphertext }
    }

    /// Final block holding both bit lengths
    pub fn length_block(&self) -> Block {
        let aad_bits = (self.aad.len() as u64).wrapping_mul(8);
        let ct_bits = (self.ciphertext.len() as u64).wrapping_mul(8);

        let mut block = [0u8; GHASH_BLOCK_SIZE];
        block[..8].copy_from_slice(&u64_to_be_bytes(aad_bits));
        block[8..].copy_from_slice(&u64_to_be_bytes(ct_bits));
        block
    }

    /// Total encoded length in bytes, always a multiple of 16
    pub fn encoded_len(&self) -> usize {
        padded_len(self.aad.len()) + padded_len(self.ciphertext.len()) + GHASH_BLOCK_SIZE
    }

    /// The encoded input, block by block, in fold order
    pub fn blocks(&self) -> impl Iterator<Item = Block> + 'a {
        let length_block = self.length_block();
        self.aad
            .chunks(GHASH_BLOCK_SIZE)
            .map(pad_block)
            .chain(self.ciphertext.chunks(GHASH_BLOCK_SIZE).map(pad_block))
            .chain(core::iter::once(length_block))
    }

    /// The encoded input as one contiguous buffer
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        for block in self.blocks() {
            out.extend_from_slice(&block);
        }
        out
    }
}
