//! AES-128 key expansion (FIPS 197, Section 5.2)

use aes128gcm_common::security::SecretBuffer;
use aes128gcm_internal::endian::{u32_from_be_bytes, u32_to_be_bytes};
use aes128gcm_params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUND_KEYS_SIZE, AES128_SCHEDULE_WORDS,
};
use zeroize::Zeroize;

use super::sbox::sub_byte;

/// Round constants, one per round, in the high byte of the word
const RCON: [u32; 10] = [
    0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000,
    0x80000000, 0x1b000000, 0x36000000,
];

/// Rotates a word left by 8 bits (1 byte)
#[inline(always)]
fn rotate_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Substitutes each byte in a word using the AES S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let mut bytes = u32_to_be_bytes(word);
    for b in bytes.iter_mut() {
        *b = sub_byte(*b);
    }
    u32::from_be_bytes(bytes)
}

/// Expand a 128-bit key into the 44-word schedule, returned as 176 bytes
///
/// Bytes `16*r..16*(r+1)` hold round key `r`; round key 0 is the key itself.
pub fn expand_key(key: &[u8; AES128_KEY_SIZE]) -> SecretBuffer<AES128_ROUND_KEYS_SIZE> {
    let mut words = [0u32; AES128_SCHEDULE_WORDS];

    for (i, chunk) in key.chunks_exact(4).enumerate() {
        words[i] = u32_from_be_bytes(chunk);
    }

    for i in 4..AES128_SCHEDULE_WORDS {
        let mut temp = words[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rotate_word(temp)) ^ RCON[i / 4 - 1];
        }
        words[i] = words[i - 4] ^ temp;
    }

    let mut schedule = SecretBuffer::zeroed();
    for (i, word) in words.iter().enumerate() {
        schedule.as_mut_slice()[i * 4..(i + 1) * 4].copy_from_slice(&u32_to_be_bytes(*word));
    }
    words.zeroize();

    schedule
}
