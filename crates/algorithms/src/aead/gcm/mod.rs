//! Galois/Counter Mode (GCM) authenticated encryption
//!
//! This module composes a 128-bit block cipher, the GCM counter mode and the
//! GHASH authenticator as specified in NIST SP 800-38D, restricted to 96-bit
//! nonces and full 128-bit tags.
//!
//! For a nonce `IV`:
//!
//! * `H = E_K(0^128)` is the hash subkey;
//! * `J0 = IV ‖ 0^31 ‖ 1` masks the tag and is never used for keystream;
//! * data is encrypted in counter mode starting from `IV ‖ 2`;
//! * `tag = E_K(J0) ⊕ GHASH_H(A ‖ pad ‖ C ‖ pad ‖ [len(A)]64 ‖ [len(C)]64)`.
//!
//! Decryption recomputes the tag over the ciphertext, compares it in constant
//! time, and only runs the keystream if the tags match. On failure the
//! caller's buffer is left as ciphertext.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use aes128gcm_api::error::Error as CoreError;
use aes128gcm_api::traits::AuthenticatedCipher;
use aes128gcm_common::security::ZeroizeGuard;
use aes128gcm_internal::constant_time::{ct_eq, ct_xor};
use aes128gcm_params::utils::symmetric::{
    AES_BLOCK_SIZE, GCM_MAX_BLOCKS, GCM_NONCE_SIZE, GCM_TAG_SIZE,
};
use zeroize::Zeroize;

use crate::block::modes::ctr::{blocks_for, CounterBlock, Ctr, FIRST_KEYSTREAM_COUNTER};
use crate::block::{Aes128, Block, BlockCipher, CipherAlgorithm};
use crate::error::{to_core_result, validate, Result};
use crate::types::nonce::AesGcmCompatible;
use crate::types::{Nonce, Tag};

pub mod auth_input;
pub mod ghash;

pub use auth_input::AuthenticatorInput;
pub use ghash::{gf_multiply, process_ghash, GHash};

/// Largest associated-data length in bytes (2^61 - 1)
pub const GCM_MAX_AAD_SIZE: u64 = (1u64 << 61) - 1;

/// AES-128 in Galois/Counter Mode
pub type Aes128Gcm = Gcm<Aes128>;

/// GCM instance bound to one cipher key and one nonce
pub struct Gcm<B: BlockCipher> {
    cipher: B,
    h: Block,
    iv: [u8; GCM_NONCE_SIZE],
}

impl<B: BlockCipher> Gcm<B> {
    /// Create a GCM instance, deriving the hash subkey from `cipher`
    pub fn new<const N: usize>(cipher: B, nonce: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: AesGcmCompatible,
    {
        validate::length("GCM nonce", N, GCM_NONCE_SIZE)?;
        let mut iv = [0u8; GCM_NONCE_SIZE];
        iv.copy_from_slice(nonce.as_ref());

        let h = cipher.encrypt_block(&[0u8; AES_BLOCK_SIZE]);

        Ok(Self { cipher, h, iv })
    }

    /// Reject inputs that would exhaust the counter or overflow the length block
    fn check_lengths(&self, data_len: usize, aad_len: usize) -> Result<()> {
        validate::counter_capacity(blocks_for(data_len), GCM_MAX_BLOCKS)?;
        validate::parameter(
            (aad_len as u64) <= GCM_MAX_AAD_SIZE,
            "aad",
            "associated data exceeds 2^61 - 1 bytes",
        )
    }

    /// E_K(J0) ⊕ GHASH over the authenticator input
    fn compute_tag(&self, aad: &[u8], ciphertext: &[u8]) -> Tag<GCM_TAG_SIZE> {
        let s = process_ghash(&self.h, aad, ciphertext);

        let mut mask = self.cipher.encrypt_block(&CounterBlock::j0(&self.iv).to_block());
        let mask = ZeroizeGuard::new(&mut mask);

        Tag::new(ct_xor(&*mask, &s))
    }

    fn keystream(&self) -> Result<Ctr<'_, B>> {
        Ctr::from_counter_block(
            &self.cipher,
            CounterBlock::new(&self.iv, FIRST_KEYSTREAM_COUNTER),
        )
    }

    /// Encrypt `buffer` in place and return the tag
    pub fn encrypt_in_place_detached(
        &self,
        buffer: &mut [u8],
        aad: &[u8],
    ) -> Result<Tag<GCM_TAG_SIZE>> {
        self.check_lengths(buffer.len(), aad.len())?;

        self.keystream()?.apply_keystream(buffer)?;

        Ok(self.compute_tag(aad, buffer))
    }

    /// Verify `tag` and decrypt `buffer` in place
    ///
    /// On authentication failure `buffer` still holds the ciphertext.
    pub fn decrypt_in_place_detached(
        &self,
        buffer: &mut [u8],
        aad: &[u8],
        tag: &Tag<GCM_TAG_SIZE>,
    ) -> Result<()> {
        self.check_lengths(buffer.len(), aad.len())?;

        let expected = self.compute_tag(aad, buffer);
        validate::authentication(ct_eq(expected.as_ref(), tag.as_ref()), "GCM")?;

        self.keystream()?.apply_keystream(buffer)
    }

    /// Encrypt and return `(ciphertext, tag)`
    #[cfg(feature = "alloc")]
    pub fn encrypt_detached(
        &self,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<(Vec<u8>, Tag<GCM_TAG_SIZE>)> {
        let mut ciphertext = plaintext.to_vec();
        let tag = self.encrypt_in_place_detached(&mut ciphertext, aad.unwrap_or(&[]))?;
        Ok((ciphertext, tag))
    }

    /// Verify a detached tag and return the plaintext
    #[cfg(feature = "alloc")]
    pub fn decrypt_detached(
        &self,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
        tag: &Tag<GCM_TAG_SIZE>,
    ) -> Result<Vec<u8>> {
        let mut plaintext = ciphertext.to_vec();
        self.decrypt_in_place_detached(&mut plaintext, aad.unwrap_or(&[]), tag)?;
        Ok(plaintext)
    }

    /// Encrypt and return `ciphertext ‖ tag`
    #[cfg(feature = "alloc")]
    pub fn internal_encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(plaintext.len() + GCM_TAG_SIZE);
        out.extend_from_slice(plaintext);
        let tag = self.encrypt_in_place_detached(&mut out, aad.unwrap_or(&[]))?;
        out.extend_from_slice(tag.as_ref());
        Ok(out)
    }

    /// Split `ciphertext ‖ tag`, verify, and return the plaintext
    #[cfg(feature = "alloc")]
    pub fn internal_decrypt(&self, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        validate::min_length("GCM ciphertext", ciphertext.len(), GCM_TAG_SIZE)?;

        let (encrypted, tag) = ciphertext.split_at(ciphertext.len() - GCM_TAG_SIZE);
        let tag = Tag::from_slice(tag)?;
        self.decrypt_detached(encrypted, aad, &tag)
    }
}

impl<B: BlockCipher> Drop for Gcm<B> {
    fn drop(&mut self) {
        self.cipher.zeroize();
        self.h.zeroize();
    }
}

impl<B: BlockCipher> AuthenticatedCipher for Gcm<B> {
    const KEY_SIZE: usize = <B::Algorithm as CipherAlgorithm>::KEY_SIZE;
    const NONCE_SIZE: usize = GCM_NONCE_SIZE;
    const TAG_SIZE: usize = GCM_TAG_SIZE;

    fn name() -> &'static str {
        "GCM"
    }

    #[cfg(feature = "alloc")]
    fn seal(&self, plaintext: &[u8], aad: Option<&[u8]>) -> core::result::Result<Vec<u8>, CoreError> {
        to_core_result(self.internal_encrypt(plaintext, aad), "GCM seal")
    }

    #[cfg(feature = "alloc")]
    fn open(&self, sealed: &[u8], aad: Option<&[u8]>) -> core::result::Result<Vec<u8>, CoreError> {
        to_core_result(self.internal_decrypt(sealed, aad), "GCM open")
    }
}
