//! Counter (CTR) mode with the GCM 32-bit counter layout
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive counter blocks and XORing the result with the data. GCM fixes
//! the layout: a 96-bit IV followed by a 32-bit big-endian counter field.
//! Counter value 1 belongs to the tag mask block `J0`, so keystream starts at
//! counter 2 or later. A run stops at 0xFFFFFFFF: the next value would wrap
//! back onto `J0`.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use aes128gcm_common::barrier;
use aes128gcm_params::utils::symmetric::{AES_BLOCK_SIZE, GCM_NONCE_SIZE};

use crate::block::{Block, BlockCipher};
use crate::error::{validate, Result};
use crate::types::nonce::AesGcmCompatible;
use crate::types::Nonce;

/// Counter value reserved for the tag mask block
pub const J0_COUNTER: u32 = 1;

/// Counter value of the first keystream block
pub const FIRST_KEYSTREAM_COUNTER: u32 = 2;

/// Number of 16-byte blocks needed to cover `len` bytes
#[inline]
pub fn blocks_for(len: usize) -> u64 {
    (len as u64).div_ceil(AES_BLOCK_SIZE as u64)
}

/// IV ‖ counter, with the counter held as a native integer
#[derive(Clone, Zeroize)]
pub struct CounterBlock {
    iv: [u8; GCM_NONCE_SIZE],
    counter: u32,
}

impl CounterBlock {
    /// Counter block for `iv` with the counter field set to `counter`
    pub fn new(iv: &[u8; GCM_NONCE_SIZE], counter: u32) -> Self {
        Self { iv: *iv, counter }
    }

    /// The tag mask block `IV ‖ 00000001`
    pub fn j0(iv: &[u8; GCM_NONCE_SIZE]) -> Self {
        Self::new(iv, J0_COUNTER)
    }

    /// Current value of the counter field
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Advance the counter field by one
    ///
    /// 0xFFFFFFFF wraps to 1; the all-zero counter is never produced.
    pub fn increment(&mut self) {
        self.counter = match self.counter.wrapping_add(1) {
            0 => 1,
            next => next,
        };
    }

    /// Serialize as a 16-byte block
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; AES_BLOCK_SIZE];
        block[..GCM_NONCE_SIZE].copy_from_slice(&self.iv);
        BigEndian::write_u32(&mut block[GCM_NONCE_SIZE..], self.counter);
        block
    }
}

/// Counter-mode keystream generator over a borrowed block cipher
///
/// Keystream is consumed byte by byte, so successive calls to
/// [`Ctr::apply_keystream`] continue where the last one stopped, including
/// mid-block.
pub struct Ctr<'a, B: BlockCipher> {
    cipher: &'a B,
    counter: CounterBlock,
    keystream: Block,
    keystream_pos: usize,
    blocks_used: u64,
    max_blocks: u64,
}

impl<'a, B: BlockCipher> Ctr<'a, B> {
    /// Counter mode positioned at the first GCM keystream block (counter 2)
    pub fn new<const N: usize>(cipher: &'a B, nonce: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: AesGcmCompatible,
    {
        Self::with_counter(cipher, nonce, FIRST_KEYSTREAM_COUNTER)
    }

    /// Counter mode starting at `counter`
    ///
    /// Counters 0 and 1 are rejected: neither may ever produce keystream.
    pub fn with_counter<const N: usize>(
        cipher: &'a B,
        nonce: &Nonce<N>,
        counter: u32,
    ) -> Result<Self>
    where
        Nonce<N>: AesGcmCompatible,
    {
        validate::length("CTR nonce", N, GCM_NONCE_SIZE)?;
        let mut iv = [0u8; GCM_NONCE_SIZE];
        iv.copy_from_slice(nonce.as_ref());

        Self::from_counter_block(cipher, CounterBlock::new(&iv, counter))
    }

    /// Counter mode starting from an explicit counter block
    pub fn from_counter_block(cipher: &'a B, counter: CounterBlock) -> Result<Self> {
        validate::parameter(
            counter.counter() >= FIRST_KEYSTREAM_COUNTER,
            "counter",
            "keystream counter must be at least 2",
        )?;

        // Blocks left before the counter field would wrap onto J0
        let max_blocks = u64::from(u32::MAX) - u64::from(counter.counter()) + 1;

        Ok(Self {
            cipher,
            counter,
            keystream: [0u8; AES_BLOCK_SIZE],
            keystream_pos: AES_BLOCK_SIZE,
            blocks_used: 0,
            max_blocks,
        })
    }

    /// Counter value the next fresh keystream block will use
    pub fn next_counter(&self) -> u32 {
        self.counter.counter()
    }

    /// Encrypt the current counter block into the keystream buffer
    fn generate_keystream(&mut self) {
        barrier::compiler_fence_seq_cst();

        self.keystream = self.cipher.encrypt_block(&self.counter.to_block());
        self.counter.increment();
        self.blocks_used += 1;
        self.keystream_pos = 0;

        barrier::compiler_fence_seq_cst();
    }

    /// XOR `data` in place with the next `data.len()` keystream bytes
    ///
    /// Refuses up front, leaving `data` untouched, when the call would need
    /// a counter value past 0xFFFFFFFF.
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        let buffered = AES_BLOCK_SIZE - self.keystream_pos;
        let fresh = blocks_for(data.len().saturating_sub(buffered));
        validate::counter_capacity(self.blocks_used + fresh, self.max_blocks)?;

        barrier::compiler_fence_seq_cst();

        for byte in data.iter_mut() {
            if self.keystream_pos >= AES_BLOCK_SIZE {
                self.generate_keystream();
            }
            *byte ^= self.keystream[self.keystream_pos];
            self.keystream_pos += 1;
        }

        barrier::compiler_fence_seq_cst();

        Ok(())
    }

    /// Fill `output` with raw keystream
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.fill(0);
        self.apply_keystream(output)
    }
}

impl<B: BlockCipher> Drop for Ctr<'_, B> {
    fn drop(&mut self) {
        self.keystream.zeroize();
    }
}
