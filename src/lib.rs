//! # rcrypt
//!
//! A pure Rust AES-256 engine with ECB, CBC, GCM and GCM-SIV modes.
//!
//! This is a facade crate. The byte-array functions below take keys, IVs,
//! nonces and tags as plain slices, check their lengths, run the mode from
//! [`algorithms`] and report failures as [`Error`]. Each call expands the
//! key into a fresh round-key schedule that is zeroized before it returns.
//!
//! ```
//! let key = rcrypt::generate_key();
//! let nonce = rcrypt::generate_nonce();
//!
//! let mut buffer = b"attack at dawn".to_vec();
//! let tag = rcrypt::gcm_encrypt(&mut buffer, b"hdr", key.as_ref(), nonce.as_ref())?;
//! rcrypt::gcm_decrypt(&mut buffer, b"hdr", key.as_ref(), nonce.as_ref(), &tag)?;
//! assert_eq!(buffer, b"attack at dawn");
//! # Ok::<(), rcrypt::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - [`rcrypt-algorithms`]: the block cipher, modes and universal hashes
//! - [`rcrypt-api`]: the public error type and the `HashFunction` trait
//! - [`rcrypt-common`]: zeroizing containers
//! - [`rcrypt-params`]: size constants and mode limits

#![forbid(unsafe_code)]

pub use rcrypt_algorithms as algorithms;
pub use rcrypt_api as api;
pub use rcrypt_common as common;
pub use rcrypt_internal as internal;
pub use rcrypt_params as params;

pub use rcrypt_api::{Error, ErrorKind, HashFunction, Result, ResultExt};

use rand::rngs::OsRng;
use rcrypt_algorithms::aead::{AeadCipher, Gcm, GcmSiv};
use rcrypt_algorithms::block::{self, Aes256, Cbc, Ecb};
use rcrypt_algorithms::types::{Nonce, SecretBytes, Tag};
use rcrypt_params::utils::symmetric::{
    AES256_KEY_SIZE, CBC_IV_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE, SIV_TAG_SIZE,
};

/// Common imports for rcrypt users
pub mod prelude {
    pub use crate::api::{Error, ErrorKind, HashFunction, Result};
    pub use crate::algorithms::{
        AeadCipher, Aes256, BlockCipher, Cbc, Ecb, Gcm, GcmSiv, Nonce, SecretBytes, Tag,
    };
    pub use crate::common::{SecretBuffer, SecretVec};
}

/// Encrypts one 16-byte block in place
pub fn block_encrypt(block: &mut [u8], key: &[u8]) -> Result<()> {
    Ok(block::block_encrypt(block, key)?)
}

/// Decrypts one 16-byte block in place
pub fn block_decrypt(block: &mut [u8], key: &[u8]) -> Result<()> {
    Ok(block::block_decrypt(block, key)?)
}

/// Pads and encrypts `plaintext` block by block
pub fn ecb_encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let ecb = Ecb::new(Aes256::from_slice(key)?);
    Ok(ecb.encrypt(plaintext)?)
}

/// Decrypts and unpads ECB ciphertext
pub fn ecb_decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let ecb = Ecb::new(Aes256::from_slice(key)?);
    Ok(ecb.decrypt(ciphertext)?)
}

/// Pads and encrypts `plaintext` in CBC mode under a 16-byte IV
pub fn cbc_encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let cbc = Cbc::from_slice(Aes256::from_slice(key)?, iv)?;
    Ok(cbc.encrypt(plaintext)?)
}

/// Decrypts and unpads CBC ciphertext
pub fn cbc_decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let cbc = Cbc::from_slice(Aes256::from_slice(key)?, iv)?;
    Ok(cbc.decrypt(ciphertext)?)
}

/// GCM-encrypts `buffer` in place and returns the tag
pub fn gcm_encrypt(
    buffer: &mut [u8],
    aad: &[u8],
    key: &[u8],
    nonce: &[u8],
) -> Result<[u8; GCM_TAG_SIZE]> {
    let gcm = Gcm::from_slice(Aes256::from_slice(key)?, nonce)?;
    Ok(gcm.encrypt_in_place(buffer, aad)?.into_bytes())
}

/// Verifies `tag` and GCM-decrypts `buffer` in place
///
/// On authentication failure `buffer` still holds the ciphertext.
pub fn gcm_decrypt(
    buffer: &mut [u8],
    aad: &[u8],
    key: &[u8],
    nonce: &[u8],
    tag: &[u8],
) -> Result<()> {
    let gcm = Gcm::from_slice(Aes256::from_slice(key)?, nonce)?;
    let tag = Tag::<GCM_TAG_SIZE>::from_slice(tag)?;
    Ok(gcm.decrypt_in_place(buffer, aad, &tag)?)
}

/// GCM-SIV-encrypts `buffer` in place and returns the tag
pub fn siv_encrypt(
    buffer: &mut [u8],
    aad: &[u8],
    key: &[u8],
    nonce: &[u8],
) -> Result<[u8; SIV_TAG_SIZE]> {
    let siv = GcmSiv::from_slice(Aes256::from_slice(key)?, nonce)?;
    Ok(siv.encrypt_in_place(buffer, aad)?.into_bytes())
}

/// Verifies `tag` and GCM-SIV-decrypts `buffer` in place
///
/// The plaintext is only written back once the tag has been checked.
pub fn siv_decrypt(
    buffer: &mut [u8],
    aad: &[u8],
    key: &[u8],
    nonce: &[u8],
    tag: &[u8],
) -> Result<()> {
    let siv = GcmSiv::from_slice(Aes256::from_slice(key)?, nonce)?;
    let tag = Tag::<SIV_TAG_SIZE>::from_slice(tag)?;
    Ok(siv.decrypt_in_place(buffer, aad, &tag)?)
}

/// Fresh 256-bit key from the operating system RNG
pub fn generate_key() -> SecretBytes<AES256_KEY_SIZE> {
    SecretBytes::random(&mut OsRng)
}

/// Fresh CBC IV from the operating system RNG
pub fn generate_iv() -> Nonce<CBC_IV_SIZE> {
    Nonce::random(&mut OsRng)
}

/// Fresh 96-bit GCM / GCM-SIV nonce from the operating system RNG
pub fn generate_nonce() -> Nonce<GCM_NONCE_SIZE> {
    Nonce::random(&mut OsRng)
}
