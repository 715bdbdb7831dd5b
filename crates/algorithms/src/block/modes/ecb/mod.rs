//! Electronic codebook (ECB) mode with block padding
//!
//! Each 16-byte block is transformed independently. Identical plaintext
//! blocks give identical ciphertext blocks, so this mode is only suitable
//! for single-block or test use.

use alloc::vec::Vec;
use rcrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use tracing::debug;
use zeroize::Zeroizing;

use super::{pad, try_vec, unpadded_len};
use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode over an owned block cipher
#[derive(Clone)]
pub struct Ecb<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Ecb<B> {
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Pad and encrypt `plaintext`
    ///
    /// The output is `len + (16 - len % 16)` bytes. Empty input is rejected.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::min_length("ECB plaintext", plaintext.len(), 1)?;
        debug!(len = plaintext.len(), "ECB encrypt");

        let mut out = pad("ECB output", plaintext)?;
        for block in out.chunks_exact_mut(AES_BLOCK_SIZE) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(out)
    }

    /// Decrypt `ciphertext` and strip its padding
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::min_length("ECB ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;
        validate::multiple_of("ECB ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;
        debug!(len = ciphertext.len(), "ECB decrypt");

        let mut out = Zeroizing::new(try_vec("ECB output", ciphertext.len())?);
        out.extend_from_slice(ciphertext);
        for block in out.chunks_exact_mut(AES_BLOCK_SIZE) {
            self.cipher.decrypt_block(block)?;
        }

        let len = unpadded_len("ECB", &out)?;
        out.truncate(len);
        Ok(core::mem::take(&mut *out))
    }
}
