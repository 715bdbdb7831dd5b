//! Authenticated encryption with associated data
//!
//! Both modes encrypt in place and return a detached 16-byte tag. With an
//! allocator, [`AeadCipher::encrypt`] and [`AeadCipher::decrypt`] work on
//! owned `ciphertext || tag` buffers instead.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
use zeroize::Zeroizing;

use rcrypt_params::utils::symmetric::{AES256_KEY_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE, SIV_NONCE_SIZE, SIV_TAG_SIZE};

use crate::error::Result;
#[cfg(feature = "alloc")]
use crate::error::{validate, Error};
use crate::types::Tag;

pub mod gcm;
#[cfg(feature = "alloc")]
pub mod gcm_siv;

pub use gcm::Gcm;
#[cfg(feature = "alloc")]
pub use gcm_siv::GcmSiv;

/// Tag size shared by every AEAD here
pub const TAG_SIZE: usize = GCM_TAG_SIZE;

/// Marker trait for AEAD algorithms
pub trait AeadAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Nonce size in bytes
    const NONCE_SIZE: usize;

    /// Tag size in bytes
    const TAG_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Type-level constants for AES-256-GCM
pub enum Aes256GcmAlgorithm {}

impl AeadAlgorithm for Aes256GcmAlgorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const NONCE_SIZE: usize = GCM_NONCE_SIZE;
    const TAG_SIZE: usize = GCM_TAG_SIZE;

    fn name() -> &'static str {
        "GCM"
    }
}

/// Type-level constants for AES-256-GCM-SIV
pub enum Aes256GcmSivAlgorithm {}

impl AeadAlgorithm for Aes256GcmSivAlgorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const NONCE_SIZE: usize = SIV_NONCE_SIZE;
    const TAG_SIZE: usize = SIV_TAG_SIZE;

    fn name() -> &'static str {
        "GCM-SIV"
    }
}

/// An AEAD bound to a key and nonce
pub trait AeadCipher {
    /// The algorithm this cipher implements
    type Algorithm: AeadAlgorithm;

    /// Encrypt `buffer` in place and return the tag
    fn encrypt_in_place(&self, buffer: &mut [u8], aad: &[u8]) -> Result<Tag<TAG_SIZE>>;

    /// Verify `tag` and decrypt `buffer` in place
    ///
    /// On failure `buffer` is left exactly as it was passed in.
    fn decrypt_in_place(&self, buffer: &mut [u8], aad: &[u8], tag: &Tag<TAG_SIZE>) -> Result<()>;

    /// Encrypt into a new `ciphertext || tag` buffer
    #[cfg(feature = "alloc")]
    fn encrypt(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let total = plaintext.len().checked_add(TAG_SIZE).ok_or(Error::Allocation {
            context: "AEAD output",
            requested: usize::MAX,
        })?;
        let mut out = crate::block::modes::try_vec("AEAD output", total)?;
        out.extend_from_slice(plaintext);
        let tag = self.encrypt_in_place(&mut out, aad)?;
        out.extend_from_slice(tag.as_ref());
        Ok(out)
    }

    /// Decrypt a `ciphertext || tag` buffer into a new plaintext
    #[cfg(feature = "alloc")]
    fn decrypt(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        validate::min_length("AEAD ciphertext", ciphertext.len(), TAG_SIZE)?;
        let (body, tag) = ciphertext.split_at(ciphertext.len() - TAG_SIZE);
        let tag = Tag::<TAG_SIZE>::from_slice(tag)?;

        let mut out = Zeroizing::new(crate::block::modes::try_vec("AEAD output", body.len())?);
        out.extend_from_slice(body);
        self.decrypt_in_place(&mut out, aad, &tag)?;
        Ok(core::mem::take(&mut *out))
    }

    /// Returns the cipher name
    fn name() -> &'static str {
        Self::Algorithm::name()
    }
}
