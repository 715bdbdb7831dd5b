//! Pluggable hash function interface
//!
//! The cipher core never hashes anything itself. Layers built on top of it
//! (public-key padding schemes, for instance) receive a hash function through
//! this trait so that the digest algorithm can be swapped without touching
//! the caller.

use crate::error::Result;

/// A byte-oriented hash function with a fixed digest size
pub trait HashFunction {
    /// Size of the digest in bytes
    const OUTPUT_SIZE: usize;

    /// Human readable algorithm name
    fn name() -> &'static str;

    /// Hash `data` in one shot
    ///
    /// The returned digest is always exactly [`Self::OUTPUT_SIZE`] bytes.
    fn hash(data: &[u8]) -> Result<Vec<u8>>;

    /// Digest size of this hash function
    fn output_size() -> usize {
        Self::OUTPUT_SIZE
    }
}
