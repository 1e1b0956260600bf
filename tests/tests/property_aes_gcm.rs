//! Property-based tests for AES-128-GCM

use aes128gcm::api::Error as ApiError;
use aes128gcm_algorithms::block::{Aes128, Ctr};
use aes128gcm_algorithms::types::Nonce;
use proptest::prelude::*;

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=200)
}

proptest! {
    #[test]
    fn aes128_gcm_roundtrip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 12]>(),
        pt in message(),
        aad in message(),
    ) {
        let (ct, tag) = aes128gcm::encrypt(&pt, &key, &iv, &aad).unwrap();
        prop_assert_eq!(ct.len(), pt.len());

        let decrypted = aes128gcm::decrypt(&ct, &key, &iv, &aad, &tag).unwrap();
        prop_assert_eq!(decrypted, pt);
    }

    #[test]
    fn ciphertext_bit_flip_is_rejected(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 12]>(),
        pt in prop::collection::vec(any::<u8>(), 1..=100),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let (mut ct, tag) = aes128gcm::encrypt(&pt, &key, &iv, &[]).unwrap();
        let i = index.index(ct.len());
        ct[i] ^= 1 << bit;

        let result = aes128gcm::decrypt(&ct, &key, &iv, &[], &tag);
        let rejected = matches!(result, Err(ApiError::AuthenticationFailed { .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn tag_bit_flip_is_rejected(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 12]>(),
        pt in message(),
        index in 0usize..16,
        bit in 0u8..8,
    ) {
        let (ct, mut tag) = aes128gcm::encrypt(&pt, &key, &iv, &[]).unwrap();
        tag[index] ^= 1 << bit;
        prop_assert!(aes128gcm::decrypt(&ct, &key, &iv, &[], &tag).is_err());
    }

    #[test]
    fn aad_bit_flip_is_rejected(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 12]>(),
        pt in message(),
        aad in prop::collection::vec(any::<u8>(), 1..=64),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let (ct, tag) = aes128gcm::encrypt(&pt, &key, &iv, &aad).unwrap();
        let mut tampered = aad.clone();
        let i = index.index(tampered.len());
        tampered[i] ^= 1 << bit;
        prop_assert!(aes128gcm::decrypt(&ct, &key, &iv, &tampered, &tag).is_err());
    }

    #[test]
    fn key_or_iv_bit_flip_is_rejected(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 12]>(),
        pt in message(),
        key_index in 0usize..16,
        iv_index in 0usize..12,
        bit in 0u8..8,
    ) {
        let (ct, tag) = aes128gcm::encrypt(&pt, &key, &iv, &[]).unwrap();

        let mut other_key = key;
        other_key[key_index] ^= 1 << bit;
        prop_assert!(aes128gcm::decrypt(&ct, &other_key, &iv, &[], &tag).is_err());

        let mut other_iv = iv;
        other_iv[iv_index] ^= 1 << bit;
        prop_assert!(aes128gcm::decrypt(&ct, &key, &other_iv, &[], &tag).is_err());
    }

    #[test]
    fn keystream_is_self_inverse(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 12]>(),
        data in message(),
    ) {
        let cipher = Aes128::from_key_bytes(&key);
        let nonce = Nonce::<12>::new(iv);

        let mut buffer = data.clone();
        Ctr::new(&cipher, &nonce).unwrap().apply_keystream(&mut buffer).unwrap();
        Ctr::new(&cipher, &nonce).unwrap().apply_keystream(&mut buffer).unwrap();
        prop_assert_eq!(buffer, data);
    }

    #[test]
    fn ciphertext_is_plaintext_xor_keystream(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 12]>(),
        pt in message(),
    ) {
        let (ct, _) = aes128gcm::encrypt(&pt, &key, &iv, &[]).unwrap();

        let cipher = Aes128::from_key_bytes(&key);
        let mut keystream = vec![0u8; pt.len()];
        Ctr::new(&cipher, &Nonce::<12>::new(iv))
            .unwrap()
            .keystream(&mut keystream)
            .unwrap();

        let xored: Vec<u8> = pt.iter().zip(&keystream).map(|(p, k)| p ^ k).collect();
        prop_assert_eq!(ct, xored);
    }

    #[test]
    fn aad_changes_the_tag(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 12]>(),
        pt in message(),
        aad in prop::collection::vec(any::<u8>(), 1..=64),
    ) {
        let (ct_a, tag_a) = aes128gcm::encrypt(&pt, &key, &iv, &[]).unwrap();
        let (ct_b, tag_b) = aes128gcm::encrypt(&pt, &key, &iv, &aad).unwrap();
        prop_assert_eq!(ct_a, ct_b);
        prop_assert_ne!(tag_a, tag_b);
    }
}
