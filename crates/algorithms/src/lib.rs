//! AES-256 and its modes of operation
//!
//! The block cipher is built from a compile-time GF(2^8) engine with no
//! lookup tables beyond the two S-boxes. On top of it sit ECB and CBC with
//! PKCS#7-style padding, a generic CTR keystream, and the two AEAD
//! constructions GCM and GCM-SIV.
//!
//! Every mode validates its inputs and reports failures through [`Error`];
//! nothing here panics on bad lengths. The crate is usable without `std`;
//! the padded modes and GCM-SIV need `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "std")]
pub use error::ResultExt;
pub use error::{validate, Error, Result};

pub mod block;
pub use block::{block_decrypt, block_encrypt, Aes256, BlockCipher, CipherAlgorithm, Ctr};
#[cfg(feature = "alloc")]
pub use block::{Cbc, Ecb};

pub mod aead;
pub use aead::{AeadAlgorithm, AeadCipher, Gcm};
#[cfg(feature = "alloc")]
pub use aead::GcmSiv;

pub mod types;
pub use types::{
    CbcCompatible, ConstantTimeEq, GcmCompatible, GcmSivCompatible, Nonce, SecretBytes, Tag,
};

pub use rcrypt_common::security::{barrier, SecretBuffer};
#[cfg(feature = "alloc")]
pub use rcrypt_common::security::SecretVec;
