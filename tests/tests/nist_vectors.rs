//! Known-answer tests from the bundled CAVP-format files

use aes128gcm::api::Error as ApiError;
use aes128gcm_algorithms::aead::gcm::Gcm;
use aes128gcm_algorithms::block::Aes128;
use aes128gcm_algorithms::types::{Nonce, Tag};
use aes128gcm_tests::vectors::{load_gcm_file, GcmTestVector};

fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
    bytes.try_into().expect("vector field has the wrong length")
}

fn run_encrypt(v: &GcmTestVector) {
    let pt = v.pt.as_deref().expect("encrypt vectors carry PT");

    let (ct, tag) = aes128gcm::encrypt(pt, &fixed(&v.key), &fixed(&v.iv), &v.aad).unwrap();
    assert_eq!(hex::encode(&ct), hex::encode(&v.ct), "CT mismatch, Count = {}", v.count);
    assert_eq!(hex::encode(tag), hex::encode(&v.tag), "Tag mismatch, Count = {}", v.count);

    // Same vector through the combined ciphertext ‖ tag form
    let gcm = Gcm::new(
        Aes128::from_key_bytes(&fixed(&v.key)),
        &Nonce::<12>::new(fixed(&v.iv)),
    )
    .unwrap();
    let sealed = gcm.internal_encrypt(pt, Some(&v.aad)).unwrap();
    assert_eq!(&sealed[..ct.len()], &v.ct[..]);
    assert_eq!(&sealed[ct.len()..], &v.tag[..]);
}

fn run_decrypt(v: &GcmTestVector) {
    let result = aes128gcm::decrypt(&v.ct, &fixed(&v.key), &fixed(&v.iv), &v.aad, &fixed(&v.tag));

    if v.fail_expected {
        assert!(
            matches!(result, Err(ApiError::AuthenticationFailed { .. })),
            "Count = {} should fail authentication",
            v.count
        );

        // In-place decryption must leave the ciphertext untouched
        let gcm = Gcm::new(
            Aes128::from_key_bytes(&fixed(&v.key)),
            &Nonce::<12>::new(fixed(&v.iv)),
        )
        .unwrap();
        let mut buffer = v.ct.clone();
        let tag = Tag::<16>::from_slice(&v.tag).unwrap();
        assert!(gcm.decrypt_in_place_detached(&mut buffer, &v.aad, &tag).is_err());
        assert_eq!(buffer, v.ct);
    } else {
        let expected = v.pt.as_deref().expect("passing decrypt vectors carry PT");
        assert_eq!(result.unwrap(), expected, "PT mismatch, Count = {}", v.count);
    }
}

#[test]
fn test_gcm_encrypt_vectors() {
    let groups = load_gcm_file("gcmEncryptExtIV128.rsp").unwrap();
    let mut total = 0;

    for group in &groups {
        for v in &group.vectors {
            assert_eq!(v.ct.len() * 8, group.pt_len);
            assert_eq!(v.aad.len() * 8, group.aad_len);
            run_encrypt(v);
            total += 1;
        }
    }

    assert_eq!(total, 8);
}

#[test]
fn test_gcm_decrypt_vectors() {
    let groups = load_gcm_file("gcmDecrypt128.rsp").unwrap();
    let mut passed = 0;
    let mut rejected = 0;

    for group in &groups {
        for v in &group.vectors {
            run_decrypt(v);
            if v.fail_expected {
                rejected += 1;
            } else {
                passed += 1;
            }
        }
    }

    assert_eq!(passed, 4);
    assert_eq!(rejected, 5);
}
