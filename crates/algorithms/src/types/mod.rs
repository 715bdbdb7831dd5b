//! Fixed-size wrappers for keys, nonces and tags
//!
//! Sizes are carried in the type so a GCM nonce cannot be handed to CBC and a
//! 16-byte key cannot reach the AES-256 schedule.

pub mod key;
pub mod nonce;
pub mod tag;

pub(crate) mod sealed;

pub use key::SecretBytes;
pub use nonce::{CbcCompatible, GcmCompatible, GcmSivCompatible, Nonce};
pub use tag::Tag;

pub use rcrypt_common::security::SecretBuffer;

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values without an early exit on the first difference
    fn ct_eq(&self, other: &Self) -> bool;
}
