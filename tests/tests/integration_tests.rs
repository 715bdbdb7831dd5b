//! End-to-end tests across the facade and the typed API

use rcrypt::ErrorKind;
use rcrypt_algorithms::aead::gcm::ghash::ghash;
use rcrypt_algorithms::aead::gcm_siv::polyval::polyval;
use rcrypt_algorithms::aead::{AeadCipher, Gcm, GcmSiv};
use rcrypt_algorithms::block::{Aes256, BigEndian32, BlockCipher, Cbc, Ctr, Ecb, LittleEndian32};
use rcrypt_algorithms::types::SecretBytes;
use rcrypt_tests::{init_tracing, random_bytes, seeded_rng, BOUNDARY_LENGTHS};

#[test]
fn facade_matches_typed_api() {
    init_tracing();
    let mut rng = seeded_rng(42);
    let key = random_bytes(&mut rng, 32);
    let iv = random_bytes(&mut rng, 16);
    let nonce = random_bytes(&mut rng, 12);
    let aes = Aes256::from_slice(&key).unwrap();

    for &len in BOUNDARY_LENGTHS {
        let data = random_bytes(&mut rng, len);

        if len > 0 {
            let ecb = Ecb::new(aes.clone());
            assert_eq!(rcrypt::ecb_encrypt(&data, &key).unwrap(), ecb.encrypt(&data).unwrap());

            let cbc = Cbc::from_slice(aes.clone(), &iv).unwrap();
            let ct = rcrypt::cbc_encrypt(&data, &key, &iv).unwrap();
            assert_eq!(ct, cbc.encrypt(&data).unwrap());
            assert_eq!(rcrypt::cbc_decrypt(&ct, &key, &iv).unwrap(), data);
        }

        let gcm = Gcm::from_slice(aes.clone(), &nonce).unwrap();
        let mut buffer = data.clone();
        let tag = rcrypt::gcm_encrypt(&mut buffer, b"aad", &key, &nonce).unwrap();
        let mut sealed = gcm.encrypt(&data, b"aad").unwrap();
        assert_eq!(&sealed[..len], &buffer[..]);
        assert_eq!(&sealed[len..], &tag[..]);
        sealed.truncate(len);
        rcrypt::gcm_decrypt(&mut sealed, b"aad", &key, &nonce, &tag).unwrap();
        assert_eq!(sealed, data);

        let siv = GcmSiv::from_slice(aes.clone(), &nonce).unwrap();
        let mut buffer = data.clone();
        let tag = rcrypt::siv_encrypt(&mut buffer, b"aad", &key, &nonce).unwrap();
        let sealed = siv.encrypt(&data, b"aad").unwrap();
        assert_eq!(&sealed[..len], &buffer[..]);
        assert_eq!(&sealed[len..], &tag[..]);
        rcrypt::siv_decrypt(&mut buffer, b"aad", &key, &nonce, &tag).unwrap();
        assert_eq!(buffer, data);
    }
}

#[test]
fn padded_lengths_at_block_boundaries() {
    let key = [0x42u8; 32];
    for &len in BOUNDARY_LENGTHS.iter().filter(|&&len| len > 0) {
        let data = vec![0xa5u8; len];
        let ct = rcrypt::ecb_encrypt(&data, &key).unwrap();
        assert_eq!(ct.len(), (len / 16 + 1) * 16);
        assert_eq!(rcrypt::ecb_decrypt(&ct, &key).unwrap(), data);
    }
}

#[test]
fn wrong_key_fails_padding_or_differs() {
    let key = [1u8; 32];
    let other = [2u8; 32];
    let ct = rcrypt::ecb_encrypt(b"some secret text", &key).unwrap();

    match rcrypt::ecb_decrypt(&ct, &other) {
        Ok(pt) => assert_ne!(pt, b"some secret text"),
        Err(err) => assert_eq!(err.kind(), ErrorKind::Length),
    }
}

#[test]
fn gcm_and_siv_disagree_on_same_inputs() {
    let key = [9u8; 32];
    let nonce = [3u8; 12];
    let mut a = b"same plaintext".to_vec();
    let mut b = a.clone();

    let gcm_tag = rcrypt::gcm_encrypt(&mut a, &[], &key, &nonce).unwrap();
    let siv_tag = rcrypt::siv_encrypt(&mut b, &[], &key, &nonce).unwrap();
    assert_ne!(a, b);
    assert_ne!(gcm_tag, siv_tag);

    // tags are not interchangeable between the two constructions
    let err = rcrypt::siv_decrypt(&mut a, &[], &key, &nonce, &gcm_tag).unwrap_err();
    assert!(err.is_authentication_failure());
}

#[test]
fn ghash_and_polyval_are_distinct() {
    let h = [0x5au8; 16];
    let data = [0x33u8; 32];
    assert_ne!(ghash(&h, &[], &data), polyval(&h, &[], &data));
    assert_eq!(ghash(&h, &[], &data), ghash(&h, &[], &data));
}

#[test]
fn ctr_counter_orders_differ() {
    let aes = Aes256::new(&SecretBytes::new([7u8; 32]));
    let start = [0u8; 16];

    let mut be = [0u8; 48];
    let mut le = [0u8; 48];
    Ctr::<_, BigEndian32>::new(&aes, start).keystream(&mut be).unwrap();
    Ctr::<_, LittleEndian32>::new(&aes, start).keystream(&mut le).unwrap();

    // the first block is E(start) for both; later blocks use different counters
    assert_eq!(be[..16], le[..16]);
    assert_ne!(be[16..], le[16..]);
}

#[test]
fn generated_material_round_trips() {
    let key = rcrypt::generate_key();
    let nonce = rcrypt::generate_nonce();
    let iv = rcrypt::generate_iv();

    let ct = rcrypt::cbc_encrypt(b"generated", key.as_ref(), iv.as_ref()).unwrap();
    assert_eq!(rcrypt::cbc_decrypt(&ct, key.as_ref(), iv.as_ref()).unwrap(), b"generated");

    let typed = GcmSiv::new(Aes256::new(&key), &nonce).unwrap();
    let sealed = typed.encrypt(b"generated", &[]).unwrap();
    assert_eq!(typed.decrypt(&sealed, &[]).unwrap(), b"generated");
}

#[test]
fn errors_convert_with_kinds() {
    let err: rcrypt_api::Error = rcrypt_algorithms::Error::Padding { context: "ECB" }.into();
    assert_eq!(err.kind(), ErrorKind::Length);

    let err = rcrypt::gcm_decrypt(&mut [0u8; 8], &[], &[0u8; 32], &[0u8; 12], &[0u8; 16])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);

    let err = rcrypt::cbc_decrypt(&[0u8; 32], &[0u8; 31], &[0u8; 16]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Length);
}
