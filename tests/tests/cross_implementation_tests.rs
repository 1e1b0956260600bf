//! Cross-checks between independent routes through the construction
//!
//! The tag for an empty message under the zero key and zero IV is
//! `E(J0) ⊕ GHASH(length block)`, which can be assembled from the public
//! building blocks without the GCM orchestrator.

use aes128gcm_algorithms::aead::gcm::auth_input::AuthenticatorInput;
use aes128gcm_algorithms::aead::gcm::{ghash::ghash, process_ghash, Gcm};
use aes128gcm_algorithms::block::{Aes128, BlockCipher, CounterBlock, Ctr};
use aes128gcm_algorithms::types::Nonce;

fn xor16(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = a[i] ^ b[i];
    }
    out
}

#[test]
fn test_zero_key_empty_message_from_building_blocks() {
    let cipher = Aes128::from_key_bytes(&[0u8; 16]);
    let iv = [0u8; 12];

    let h = cipher.encrypt_block(&[0u8; 16]);
    let y = process_ghash(&h, &[], &[]);
    let mask = cipher.encrypt_block(&CounterBlock::j0(&iv).to_block());
    let assembled = xor16(&mask, &y);

    let (ct, tag) = aes128gcm::encrypt(&[], &[0u8; 16], &iv, &[]).unwrap();
    assert!(ct.is_empty());
    assert_eq!(tag, assembled);
    assert_eq!(hex::encode(tag), "58e2fccefa7e3061367f1d57a4e7455a");
}

#[test]
fn test_tag_from_building_blocks_matches_orchestrator() {
    let key: [u8; 16] = hex::decode("feffe9928665731c6d6a8f9467308308")
        .unwrap()
        .try_into()
        .unwrap();
    let iv: [u8; 12] = hex::decode("cafebabefacedbaddecaf888")
        .unwrap()
        .try_into()
        .unwrap();
    let aad = hex::decode("feedfacedeadbeeffeedfacedeadbeefabaddad2").unwrap();
    let pt: Vec<u8> = (0..77u8).collect();

    let cipher = Aes128::from_key_bytes(&key);

    // Counter mode from IV ‖ 2
    let mut ct = pt.clone();
    Ctr::new(&cipher, &Nonce::<12>::new(iv))
        .unwrap()
        .apply_keystream(&mut ct)
        .unwrap();

    // GHASH over the explicitly laid-out authenticator input
    let h = cipher.encrypt_block(&[0u8; 16]);
    let encoded = AuthenticatorInput::new(&aad, &ct).to_vec();
    assert_eq!(encoded.len() % 16, 0);
    let y = ghash(&h, &encoded).unwrap();

    let mask = cipher.encrypt_block(&CounterBlock::j0(&iv).to_block());
    let tag = xor16(&mask, &y);

    let gcm = Gcm::new(Aes128::from_key_bytes(&key), &Nonce::<12>::new(iv)).unwrap();
    let (expected_ct, expected_tag) = gcm.encrypt_detached(&pt, Some(&aad)).unwrap();
    assert_eq!(ct, expected_ct);
    assert_eq!(&tag[..], expected_tag.as_ref());
}

#[test]
fn test_facade_and_orchestrator_agree() {
    let key = [0x5au8; 16];
    let iv = [0xa5u8; 12];
    let pt = b"the facade wraps the same construction";

    let (ct, tag) = aes128gcm::encrypt(pt, &key, &iv, b"ad").unwrap();

    let gcm = Gcm::new(Aes128::from_key_bytes(&key), &Nonce::<12>::new(iv)).unwrap();
    let sealed = gcm.internal_encrypt(pt, Some(b"ad")).unwrap();

    assert_eq!(&sealed[..pt.len()], &ct[..]);
    assert_eq!(&sealed[pt.len()..], &tag[..]);
}
