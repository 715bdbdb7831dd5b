//! Sealed marker so size-compatibility traits cannot be implemented downstream

pub trait Sealed {}
