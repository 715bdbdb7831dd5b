//! AES-256-GCM-SIV (RFC 8452)
//!
//! Per-nonce keys are derived from the master key, the tag is computed
//! over the plaintext with POLYVAL, and the tag (top bit set) seeds a
//! little-endian counter keystream. Repeating a nonce reveals only whether
//! two messages were identical.

use rcrypt_common::security::{SecretBuffer, SecretVec};
use rcrypt_params::utils::symmetric::{
    AES_BLOCK_SIZE, SIV_AUTH_KEY_SIZE, SIV_ENC_KEY_SIZE, SIV_MAX_AAD, SIV_MAX_PLAINTEXT,
    SIV_NONCE_SIZE,
};
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use super::{AeadAlgorithm, AeadCipher, Aes256GcmSivAlgorithm, TAG_SIZE};
use crate::block::modes::ctr::{Ctr, LittleEndian32};
use crate::block::{Aes256, BlockCipher};
use crate::error::{validate, Error, Result};
use crate::types::nonce::GcmSivCompatible;
use crate::types::{ConstantTimeEq, Nonce, SecretBytes, Tag};

pub mod polyval;

pub use polyval::Polyval;

/// Keys derived for one nonce
struct DerivedKeys {
    auth_key: SecretBuffer<SIV_AUTH_KEY_SIZE>,
    enc_cipher: Aes256,
}

/// GCM-SIV bound to a master key and a nonce
pub struct GcmSiv {
    cipher: Aes256,
    nonce: [u8; SIV_NONCE_SIZE],
}

impl GcmSiv {
    pub fn new<const N: usize>(cipher: Aes256, nonce: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: GcmSivCompatible,
    {
        Self::from_slice(cipher, nonce.as_ref())
    }

    /// Same as [`GcmSiv::new`] for a nonce that has not been typed yet
    pub fn from_slice(cipher: Aes256, nonce: &[u8]) -> Result<Self> {
        validate::length("GCM-SIV nonce", nonce.len(), Aes256GcmSivAlgorithm::NONCE_SIZE)?;
        let mut fixed = [0u8; SIV_NONCE_SIZE];
        fixed.copy_from_slice(nonce);
        Ok(Self {
            cipher,
            nonce: fixed,
        })
    }

    /// Encrypt `LE32(i) || nonce` for i = 0..6 and keep the first half of
    /// each block: blocks 0-1 form the authentication key, 2-5 the
    /// encryption key.
    fn derive_keys(&self) -> Result<DerivedKeys> {
        let mut auth_key = SecretBuffer::<SIV_AUTH_KEY_SIZE>::zeroed();
        let mut enc_key = SecretBytes::<SIV_ENC_KEY_SIZE>::zeroed();
        let half = AES_BLOCK_SIZE / 2;

        for i in 0..6u32 {
            let mut block = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
            block[..4].copy_from_slice(&i.to_le_bytes());
            block[4..].copy_from_slice(&self.nonce);
            self.cipher.encrypt_block(&mut block[..])?;

            let i = i as usize;
            let dst = if i < 2 {
                &mut auth_key.as_mut_slice()[i * half..(i + 1) * half]
            } else {
                &mut enc_key.as_mut()[(i - 2) * half..(i - 1) * half]
            };
            dst.copy_from_slice(&block[..half]);
        }

        trace!("GCM-SIV keys derived");
        Ok(DerivedKeys {
            auth_key,
            enc_cipher: Aes256::new(&enc_key),
        })
    }

    fn compute_tag(&self, keys: &DerivedKeys, aad: &[u8], plaintext: &[u8]) -> Result<Tag<TAG_SIZE>> {
        let mut h = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
        h.copy_from_slice(keys.auth_key.as_slice());
        let mut s = Zeroizing::new(polyval::polyval(&h, aad, plaintext));

        for (b, n) in s.iter_mut().zip(self.nonce.iter()) {
            *b ^= n;
        }
        s[AES_BLOCK_SIZE - 1] &= 0x7f;
        keys.enc_cipher.encrypt_block(&mut s[..])?;

        Ok(Tag::new(*s))
    }

    fn keystream<'a>(keys: &'a DerivedKeys, tag: &Tag<TAG_SIZE>) -> Ctr<'a, Aes256, LittleEndian32> {
        let mut counter = tag.into_bytes();
        counter[AES_BLOCK_SIZE - 1] |= 0x80;
        Ctr::new(&keys.enc_cipher, counter)
    }

    fn check_lengths(aad: &[u8], text: &[u8]) -> Result<()> {
        validate::max_length("GCM-SIV plaintext", text.len(), SIV_MAX_PLAINTEXT)?;
        validate::max_length("GCM-SIV associated data", aad.len(), SIV_MAX_AAD)
    }
}

impl AeadCipher for GcmSiv {
    type Algorithm = Aes256GcmSivAlgorithm;

    fn encrypt_in_place(&self, buffer: &mut [u8], aad: &[u8]) -> Result<Tag<TAG_SIZE>> {
        Self::check_lengths(aad, buffer)?;
        debug!(len = buffer.len(), aad_len = aad.len(), "GCM-SIV encrypt");

        let keys = self.derive_keys()?;
        let tag = self.compute_tag(&keys, aad, buffer)?;
        Self::keystream(&keys, &tag).process(buffer)?;
        Ok(tag)
    }

    fn decrypt_in_place(&self, buffer: &mut [u8], aad: &[u8], tag: &Tag<TAG_SIZE>) -> Result<()> {
        Self::check_lengths(aad, buffer)?;
        debug!(len = buffer.len(), aad_len = aad.len(), "GCM-SIV decrypt");

        let keys = self.derive_keys()?;
        let mut scratch = SecretVec::try_from_slice(buffer).map_err(|_| Error::Allocation {
            context: "GCM-SIV scratch",
            requested: buffer.len(),
        })?;
        Self::keystream(&keys, tag).process(scratch.as_mut_slice())?;

        let valid = self.compute_tag(&keys, aad, scratch.as_slice())?.ct_eq(tag);
        if !valid {
            warn!(len = buffer.len(), "GCM-SIV tag mismatch");
        }
        validate::authentication(valid, Aes256GcmSivAlgorithm::name())?;

        buffer.copy_from_slice(scratch.as_slice());
        Ok(())
    }
}
