//! Error type definitions for cipher operations

use thiserror::Error;

/// Coarse classification of an [`Error`]
///
/// Successful calls return `Ok`, so there is no success kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A buffer could not be allocated
    Allocation,
    /// An input violated a size precondition (empty, misaligned, wrong key,
    /// nonce, IV or tag size, bad padding)
    Length,
    /// An AEAD tag did not match
    Authentication,
    /// Anything else
    Other,
}

/// Primary error type for cipher operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Trailing padding of a decrypted message is malformed
    #[error("{context}: invalid padding")]
    InvalidPadding { context: &'static str },

    /// Authentication tag did not verify
    #[error("Authentication failed: {context}")]
    AuthenticationFailed { context: &'static str },

    /// Output or scratch buffer could not be allocated
    #[error("{context}: allocation of {requested} bytes failed")]
    AllocationFailed {
        context: &'static str,
        requested: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The coarse kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength { .. } | Self::InvalidPadding { .. } => ErrorKind::Length,
            Self::AuthenticationFailed { .. } => ErrorKind::Authentication,
            Self::AllocationFailed { .. } => ErrorKind::Allocation,
            Self::InvalidParameter { .. } | Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidPadding { .. } => Self::InvalidPadding { context },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed { context },
            Self::AllocationFailed { requested, .. } => Self::AllocationFailed {
                context,
                requested,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// True if this error reports an AEAD tag mismatch
    pub fn is_authentication_failure(&self) -> bool {
        self.kind() == ErrorKind::Authentication
    }
}
