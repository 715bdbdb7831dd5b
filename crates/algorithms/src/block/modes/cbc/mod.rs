//! Cipher Block Chaining (CBC) mode with block padding
//!
//! Each plaintext block is XORed with the previous ciphertext block (the IV
//! for the first) before encryption. Padding follows ECB.

use alloc::vec::Vec;
use rcrypt_internal::constant_time::xor_in_place;
use rcrypt_params::utils::symmetric::{AES_BLOCK_SIZE, CBC_IV_SIZE};
use tracing::debug;
use zeroize::Zeroizing;

use super::{pad, try_vec, unpadded_len};
use crate::block::BlockCipher;
use crate::error::{validate, Result};
use crate::types::nonce::CbcCompatible;
use crate::types::Nonce;

/// CBC mode over an owned block cipher and a fixed IV
#[derive(Clone)]
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: [u8; CBC_IV_SIZE],
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    pub fn new<const N: usize>(cipher: B, iv: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: CbcCompatible,
    {
        validate::length("CBC initialization vector", N, B::block_size())?;
        Self::from_slice(cipher, iv.as_ref())
    }

    /// Same as [`Cbc::new`] for an IV that has not been typed yet
    pub fn from_slice(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), CBC_IV_SIZE)?;
        let mut fixed = [0u8; CBC_IV_SIZE];
        fixed.copy_from_slice(iv);
        Ok(Self { cipher, iv: fixed })
    }

    /// Pad and encrypt `plaintext`
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::min_length("CBC plaintext", plaintext.len(), 1)?;
        debug!(len = plaintext.len(), "CBC encrypt");

        let mut out = pad("CBC output", plaintext)?;
        let mut prev = self.iv;
        for block in out.chunks_exact_mut(AES_BLOCK_SIZE) {
            xor_in_place(block, &prev);
            self.cipher.encrypt_block(block)?;
            prev.copy_from_slice(block);
        }
        Ok(out)
    }

    /// Decrypt `ciphertext` and strip its padding
    ///
    /// Every block is decrypted first, then block `n` is XORed with the
    /// received ciphertext block `n - 1`.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::min_length("CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;
        validate::multiple_of("CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;
        debug!(len = ciphertext.len(), "CBC decrypt");

        let mut out = Zeroizing::new(try_vec("CBC output", ciphertext.len())?);
        out.extend_from_slice(ciphertext);
        for block in out.chunks_exact_mut(AES_BLOCK_SIZE) {
            self.cipher.decrypt_block(block)?;
        }

        xor_in_place(&mut out[..AES_BLOCK_SIZE], &self.iv);
        for (block, prev) in out[AES_BLOCK_SIZE..]
            .chunks_exact_mut(AES_BLOCK_SIZE)
            .zip(ciphertext.chunks_exact(AES_BLOCK_SIZE))
        {
            xor_in_place(block, prev);
        }

        let len = unpadded_len("CBC", &out)?;
        out.truncate(len);
        Ok(core::mem::take(&mut *out))
    }
}
