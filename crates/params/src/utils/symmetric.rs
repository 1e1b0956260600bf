//! Constants for AES-128 and Galois/Counter Mode

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of AES-128 rounds
pub const AES128_ROUNDS: usize = 10;

/// Number of 32-bit words in the expanded AES-128 key schedule
pub const AES128_SCHEDULE_WORDS: usize = 4 * (AES128_ROUNDS + 1);

/// Size of the expanded AES-128 key schedule in bytes
pub const AES128_ROUND_KEYS_SIZE: usize = 4 * AES128_SCHEDULE_WORDS;

/// GCM nonce (IV) size in bytes
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// Size of a GHASH field element in bytes
pub const GHASH_BLOCK_SIZE: usize = 16;

/// Largest number of keystream blocks one GCM invocation may consume
///
/// The 32-bit counter starts at 2 for the first keystream block and must not
/// revisit the value used for the tag mask.
pub const GCM_MAX_BLOCKS: u64 = (1u64 << 32) - 2;

/// Largest plaintext length in bytes for a single GCM invocation
pub const GCM_MAX_PLAINTEXT_SIZE: u64 = GCM_MAX_BLOCKS * AES_BLOCK_SIZE as u64;
