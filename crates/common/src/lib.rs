//! Common implementations and shared functionality for the rcrypt library
//!
//! Holds the zeroizing containers used for expanded keys, derived keys and
//! scratch buffers, plus the compiler barriers used around table lookups.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

pub use security::SecretBuffer;

#[cfg(feature = "alloc")]
pub use security::SecretVec;

pub use security::barrier;
