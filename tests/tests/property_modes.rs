//! Property-based tests for every AES-256 mode

use proptest::prelude::*;
use rcrypt_algorithms::aead::{AeadCipher, Gcm, GcmSiv};
use rcrypt_algorithms::block::{Aes256, BlockCipher, Cbc, Ecb};
use rcrypt_algorithms::types::{Nonce, SecretBytes, Tag};

fn cipher(key: [u8; 32]) -> Aes256 {
    Aes256::new(&SecretBytes::new(key))
}

proptest! {
    #[test]
    fn block_roundtrip(key in any::<[u8; 32]>(), block in any::<[u8; 16]>()) {
        let aes = cipher(key);
        let mut data = block;
        aes.encrypt_block(&mut data).unwrap();
        prop_assert_ne!(data, block);
        aes.decrypt_block(&mut data).unwrap();
        prop_assert_eq!(data, block);
    }

    #[test]
    fn ecb_roundtrip(key in any::<[u8; 32]>(), data in prop::collection::vec(any::<u8>(), 1..=200)) {
        let ecb = Ecb::new(cipher(key));
        let ciphertext = ecb.encrypt(&data).unwrap();

        prop_assert_eq!(ciphertext.len(), data.len() + 16 - data.len() % 16);
        prop_assert_eq!(ecb.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn cbc_roundtrip(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 1..=200)
    ) {
        let cbc = Cbc::new(cipher(key), &Nonce::<16>::new(iv)).unwrap();
        let ciphertext = cbc.encrypt(&data).unwrap();

        prop_assert_eq!(ciphertext.len() % 16, 0);
        prop_assert_eq!(cbc.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn gcm_roundtrip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        aad in prop::collection::vec(any::<u8>(), 0..=64),
        data in prop::collection::vec(any::<u8>(), 0..=200)
    ) {
        let gcm = Gcm::new(cipher(key), &Nonce::<12>::new(nonce)).unwrap();
        let mut buffer = data.clone();
        let tag = gcm.encrypt_in_place(&mut buffer, &aad).unwrap();

        prop_assert_eq!(buffer.len(), data.len());
        gcm.decrypt_in_place(&mut buffer, &aad, &tag).unwrap();
        prop_assert_eq!(buffer, data);
    }

    #[test]
    fn gcm_siv_roundtrip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        aad in prop::collection::vec(any::<u8>(), 0..=64),
        data in prop::collection::vec(any::<u8>(), 0..=200)
    ) {
        let siv = GcmSiv::new(cipher(key), &Nonce::<12>::new(nonce)).unwrap();
        let mut buffer = data.clone();
        let tag = siv.encrypt_in_place(&mut buffer, &aad).unwrap();

        prop_assert_eq!(buffer.len(), data.len());
        siv.decrypt_in_place(&mut buffer, &aad, &tag).unwrap();
        prop_assert_eq!(buffer, data);
    }

    #[test]
    fn gcm_rejects_any_flipped_bit(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 1..=100),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let gcm = Gcm::new(cipher(key), &Nonce::<12>::new(nonce)).unwrap();
        let mut buffer = data.clone();
        let tag = gcm.encrypt_in_place(&mut buffer, b"aad").unwrap();

        let i = index.index(buffer.len());
        buffer[i] ^= 1 << bit;
        let tampered = buffer.clone();

        prop_assert!(gcm.decrypt_in_place(&mut buffer, b"aad", &tag).is_err());
        prop_assert_eq!(buffer, tampered);
    }

    #[test]
    fn gcm_siv_rejects_any_flipped_tag_bit(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 0..=100),
        index in 0usize..16,
        bit in 0u8..8
    ) {
        let siv = GcmSiv::new(cipher(key), &Nonce::<12>::new(nonce)).unwrap();
        let mut buffer = data.clone();
        let tag = siv.encrypt_in_place(&mut buffer, &[]).unwrap();

        let mut bad = tag.into_bytes();
        bad[index] ^= 1 << bit;
        let sealed = buffer.clone();

        prop_assert!(siv.decrypt_in_place(&mut buffer, &[], &Tag::new(bad)).is_err());
        prop_assert_eq!(buffer, sealed);
    }

    #[test]
    fn gcm_rejects_any_flipped_tag_bit(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 0..=100),
        index in 0usize..16,
        bit in 0u8..8
    ) {
        let gcm = Gcm::new(cipher(key), &Nonce::<12>::new(nonce)).unwrap();
        let mut buffer = data.clone();
        let tag = gcm.encrypt_in_place(&mut buffer, &[]).unwrap();

        let mut bad = tag.into_bytes();
        bad[index] ^= 1 << bit;
        let sealed = buffer.clone();

        prop_assert!(gcm.decrypt_in_place(&mut buffer, &[], &Tag::new(bad)).is_err());
        prop_assert_eq!(buffer, sealed);
    }

    #[test]
    fn gcm_rejects_any_flipped_aad_bit(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        aad in prop::collection::vec(any::<u8>(), 1..=64),
        data in prop::collection::vec(any::<u8>(), 0..=100),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let gcm = Gcm::new(cipher(key), &Nonce::<12>::new(nonce)).unwrap();
        let mut buffer = data.clone();
        let tag = gcm.encrypt_in_place(&mut buffer, &aad).unwrap();

        let mut bad_aad = aad.clone();
        bad_aad[index.index(aad.len())] ^= 1 << bit;
        let sealed = buffer.clone();

        prop_assert!(gcm.decrypt_in_place(&mut buffer, &bad_aad, &tag).is_err());
        prop_assert_eq!(buffer, sealed);
    }

    #[test]
    fn gcm_siv_rejects_any_flipped_bit(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 1..=100),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let siv = GcmSiv::new(cipher(key), &Nonce::<12>::new(nonce)).unwrap();
        let mut buffer = data.clone();
        let tag = siv.encrypt_in_place(&mut buffer, b"aad").unwrap();

        let i = index.index(buffer.len());
        buffer[i] ^= 1 << bit;
        let tampered = buffer.clone();

        prop_assert!(siv.decrypt_in_place(&mut buffer, b"aad", &tag).is_err());
        prop_assert_eq!(buffer, tampered);
    }

    #[test]
    fn gcm_siv_rejects_any_flipped_aad_bit(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        aad in prop::collection::vec(any::<u8>(), 1..=64),
        data in prop::collection::vec(any::<u8>(), 0..=100),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let siv = GcmSiv::new(cipher(key), &Nonce::<12>::new(nonce)).unwrap();
        let mut buffer = data.clone();
        let tag = siv.encrypt_in_place(&mut buffer, &aad).unwrap();

        let mut bad_aad = aad.clone();
        bad_aad[index.index(aad.len())] ^= 1 << bit;
        let sealed = buffer.clone();

        prop_assert!(siv.decrypt_in_place(&mut buffer, &bad_aad, &tag).is_err());
        prop_assert_eq!(buffer, sealed);
    }

    #[test]
    fn gcm_siv_is_deterministic(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 0..=100)
    ) {
        let siv = GcmSiv::new(cipher(key), &Nonce::<12>::new(nonce)).unwrap();
        prop_assert_eq!(siv.encrypt(&data, &[]).unwrap(), siv.encrypt(&data, &[]).unwrap());
    }
}
