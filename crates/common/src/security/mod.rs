//! Security primitives and memory safety utilities

pub mod memory;
pub mod secret;

pub use secret::SecretBuffer;

#[cfg(feature = "alloc")]
pub use secret::SecretVec;

pub use memory::barrier;
