//! Public API types for the rcrypt library
//!
//! This crate holds the error type returned by every byte-array entry point of
//! the facade crate, and the collaborator traits that the cipher core exposes
//! to the layers built on top of it.

pub mod error;
pub mod traits;

pub use error::{Error, ErrorKind, Result, ResultExt};
pub use traits::HashFunction;
