//! AES-128 block cipher
//!
//! This module implements the forward AES-128 transform as specified in
//! FIPS 197. SubBytes uses the static 256-entry S-box in [`sbox`]; MixColumns
//! uses branch-free doubling in GF(2^8).
//!
//! ## Side channels
//!
//! The S-box lookup is indexed by state bytes, so this implementation is not
//! constant-time on platforms with data caches. The round keys are touched
//! once before each block and compiler fences keep the round structure from
//! being reordered, but no stronger guarantee is made.

use aes128gcm_common::barrier;
use aes128gcm_common::security::SecretBuffer;
use aes128gcm_params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES128_ROUND_KEYS_SIZE, AES_BLOCK_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Block, BlockCipher, CipherAlgorithm};
use crate::types::SecretBytes;

pub mod key_schedule;
mod sbox;

pub use key_schedule::expand_key;

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

/// AES-128 block cipher holding its expanded key schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: SecretBuffer<AES128_ROUND_KEYS_SIZE>, // 11 rounds × 16 bytes
}

impl Aes128 {
    /// Build a cipher directly from raw key bytes
    pub fn from_key_bytes(key: &[u8; AES128_KEY_SIZE]) -> Self {
        Aes128 {
            round_keys: expand_key(key),
        }
    }

    /// Round key `round` (0..=10) from the schedule
    pub fn round_key(&self, round: usize) -> &[u8] {
        &self.round_keys.as_slice()[round * 16..(round + 1) * 16]
    }

    /// SubBytes step
    fn sub_bytes(state: &mut Block) {
        for byte in state.iter_mut() {
            *byte = sbox::sub_byte(*byte);
        }
        barrier::compiler_fence_seq_cst();
    }

    /// ShiftRows step
    ///
    /// The state is column-major, so row `r` lives at indices `r, r+4, r+8,
    /// r+12` and is rotated left by `r` positions.
    fn shift_rows(state: &mut Block) {
        let temp = *state;
        state[1] = temp[5];
        state[5] = temp[9];
        state[9] = temp[13];
        state[13] = temp[1];
        state[2] = temp[10];
        state[6] = temp[14];
        state[10] = temp[2];
        state[14] = temp[6];
        state[3] = temp[15];
        state[7] = temp[3];
        state[11] = temp[7];
        state[15] = temp[11];
    }

    /// Multiply by 2 in GF(2^8)
    #[inline(always)]
    fn mul2(byte: u8) -> u8 {
        let high = byte >> 7;
        (byte << 1) ^ (high * 0x1B)
    }

    /// MixColumns step
    fn mix_columns(state: &mut Block) {
        for c in 0..4 {
            let i = c * 4;
            let s0 = state[i];
            let s1 = state[i + 1];
            let s2 = state[i + 2];
            let s3 = state[i + 3];
            state[i] = Self::mul2(s0) ^ Self::mul2(s1) ^ s1 ^ s2 ^ s3;
            state[i + 1] = s0 ^ Self::mul2(s1) ^ Self::mul2(s2) ^ s2 ^ s3;
            state[i + 2] = s0 ^ s1 ^ Self::mul2(s2) ^ Self::mul2(s3) ^ s3;
            state[i + 3] = Self::mul2(s0) ^ s0 ^ s1 ^ s2 ^ Self::mul2(s3);
        }
    }

    fn add_round_key(state: &mut Block, round_key: &[u8]) {
        for (s, k) in state.iter_mut().zip(round_key) {
            *s ^= k;
        }
    }
}

impl BlockCipher for Aes128 {
    type Algorithm = Aes128Algorithm;
    type Key = SecretBytes<AES128_KEY_SIZE>;

    fn new(key: &Self::Key) -> Self {
        Self::from_key_bytes(key)
    }

    fn encrypt_block(&self, block: &Block) -> Block {
        // Warm the cache by touching all round key bytes
        let mut warm: u8 = 0;
        for &b in self.round_keys.as_slice() {
            warm = warm.wrapping_add(b);
        }
        core::hint::black_box(warm);
        barrier::compiler_fence_seq_cst();

        let mut state = *block;

        Self::add_round_key(&mut state, self.round_key(0));

        for round in 1..AES128_ROUNDS {
            Self::sub_bytes(&mut state);
            Self::shift_rows(&mut state);
            Self::mix_columns(&mut state);
            Self::add_round_key(&mut state, self.round_key(round));
        }

        // Final round omits MixColumns
        Self::sub_bytes(&mut state);
        Self::shift_rows(&mut state);
        Self::add_round_key(&mut state, self.round_key(AES128_ROUNDS));

        state
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}
