//! Galois/Counter Mode (NIST SP 800-38D) with 96-bit nonces
//!
//! `H = E(0)`, `J0 = nonce || 0^31 || 1`. The payload keystream starts at
//! `J0 + 1` with a 32-bit big-endian counter; the tag is
//! `E(J0) ^ GHASH(AAD, C)`. Decryption authenticates the ciphertext before
//! touching it.

use rcrypt_params::utils::symmetric::{AES_BLOCK_SIZE, GCM_MAX_AAD, GCM_MAX_PLAINTEXT, GCM_NONCE_SIZE};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::{Aes256GcmAlgorithm, AeadAlgorithm, AeadCipher, TAG_SIZE};
use crate::block::modes::ctr::{BigEndian32, CounterIncrement, Ctr};
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use crate::types::nonce::GcmCompatible;
use crate::types::{ConstantTimeEq, Nonce, Tag};

pub mod ghash;

pub use ghash::GHash;

/// GCM over an owned block cipher and a fixed nonce
pub struct Gcm<B: BlockCipher> {
    cipher: B,
    h: Zeroizing<[u8; AES_BLOCK_SIZE]>,
    nonce: [u8; GCM_NONCE_SIZE],
}

impl<B: BlockCipher> Gcm<B> {
    /// Creates a new GCM instance; derives the hash subkey `H = E(0)`
    pub fn new<const N: usize>(cipher: B, nonce: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: GcmCompatible,
    {
        Self::from_slice(cipher, nonce.as_ref())
    }

    /// Same as [`Gcm::new`] for a nonce that has not been typed yet
    pub fn from_slice(cipher: B, nonce: &[u8]) -> Result<Self> {
        validate::length("GCM nonce", nonce.len(), Aes256GcmAlgorithm::NONCE_SIZE)?;
        validate::length("GCM block size", B::block_size(), AES_BLOCK_SIZE)?;

        let mut h = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
        cipher.encrypt_block(&mut h[..])?;

        let mut fixed = [0u8; GCM_NONCE_SIZE];
        fixed.copy_from_slice(nonce);

        Ok(Self {
            cipher,
            h,
            nonce: fixed,
        })
    }

    fn j0(&self) -> [u8; AES_BLOCK_SIZE] {
        let mut j0 = [0u8; AES_BLOCK_SIZE];
        j0[..GCM_NONCE_SIZE].copy_from_slice(&self.nonce);
        j0[AES_BLOCK_SIZE - 1] = 1;
        j0
    }

    fn keystream(&self) -> Ctr<'_, B, BigEndian32> {
        let mut first = self.j0();
        BigEndian32::increment(&mut first);
        Ctr::new(&self.cipher, first)
    }

    fn compute_tag(&self, aad: &[u8], ciphertext: &[u8]) -> Result<Tag<TAG_SIZE>> {
        let mut tag = Zeroizing::new(self.j0());
        self.cipher.encrypt_block(&mut tag[..])?;

        let s = Zeroizing::new(ghash::ghash(&self.h, aad, ciphertext));
        for (t, s) in tag.iter_mut().zip(s.iter()) {
            *t ^= s;
        }
        Ok(Tag::new(*tag))
    }

    fn check_lengths(aad: &[u8], text: &[u8]) -> Result<()> {
        validate::max_length("GCM plaintext", text.len(), GCM_MAX_PLAINTEXT)?;
        validate::max_length("GCM associated data", aad.len(), GCM_MAX_AAD)
    }
}

impl<B: BlockCipher> AeadCipher for Gcm<B> {
    type Algorithm = Aes256GcmAlgorithm;

    fn encrypt_in_place(&self, buffer: &mut [u8], aad: &[u8]) -> Result<Tag<TAG_SIZE>> {
        Self::check_lengths(aad, buffer)?;
        debug!(len = buffer.len(), aad_len = aad.len(), "GCM encrypt");

        self.keystream().process(buffer)?;
        self.compute_tag(aad, buffer)
    }

    fn decrypt_in_place(&self, buffer: &mut [u8], aad: &[u8], tag: &Tag<TAG_SIZE>) -> Result<()> {
        Self::check_lengths(aad, buffer)?;
        debug!(len = buffer.len(), aad_len = aad.len(), "GCM decrypt");

        let valid = self.compute_tag(aad, buffer)?.ct_eq(tag);
        if !valid {
            warn!(len = buffer.len(), "GCM tag mismatch");
        }
        validate::authentication(valid, Aes256GcmAlgorithm::name())?;

        self.keystream().process(buffer)
    }
}
