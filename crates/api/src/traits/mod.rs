//! Collaborator traits

pub mod hash;

pub use hash::HashFunction;
