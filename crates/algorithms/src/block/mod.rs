//! Block cipher implementations and modes of operation

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Result;

pub mod aes;
pub mod modes;

pub use aes::Aes256;
pub use modes::ctr::{BigEndian32, CounterIncrement, Ctr, LittleEndian32};
#[cfg(feature = "alloc")]
pub use modes::{cbc::Cbc, ecb::Ecb};

/// Static description of a block cipher algorithm
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers with type-level constraints
pub trait BlockCipher {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance with the given key
    fn new(key: &Self::Key) -> Self;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}

/// Encrypt one 16-byte block under a raw 32-byte key
///
/// The key is expanded for this call only and the schedule is wiped before
/// returning.
pub fn block_encrypt(block: &mut [u8], key: &[u8]) -> Result<()> {
    Aes256::from_slice(key)?.encrypt_block(block)
}

/// Decrypt one 16-byte block under a raw 32-byte key
pub fn block_decrypt(block: &mut [u8], key: &[u8]) -> Result<()> {
    Aes256::from_slice(key)?.decrypt_block(block)
}
