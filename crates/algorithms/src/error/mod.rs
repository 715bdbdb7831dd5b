//! Error handling for the cipher primitives
//!
//! The algorithm layer keeps its own small error type so it stays usable
//! without the standard library. With `std` enabled it converts into the
//! public [`rcrypt_api::Error`].

use core::fmt;

/// The error type for cipher primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes (or the bound that was violated)
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Trailing padding of a decrypted message is malformed
    Padding {
        /// Mode that found the bad padding
        context: &'static str,
    },

    /// Authentication failure (AEAD tag verification)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// An output or scratch buffer could not be allocated
    Allocation {
        /// Buffer that could not be allocated
        context: &'static str,
        /// Requested size in bytes
        requested: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cipher primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Padding { context } => write!(f, "Invalid padding in {}", context),
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
            Error::Allocation { context, requested } => {
                write!(f, "Allocation of {} bytes failed for {}", requested, context)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<Error> for rcrypt_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => rcrypt_api::Error::InvalidParameter {
                context: name,
                message: reason.to_string(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => rcrypt_api::Error::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Padding { context } => rcrypt_api::Error::InvalidPadding { context },
            Error::Authentication { algorithm } => {
                rcrypt_api::Error::AuthenticationFailed { context: algorithm }
            }
            Error::Allocation { context, requested } => {
                rcrypt_api::Error::AllocationFailed { context, requested }
            }
        }
    }
}

#[cfg(feature = "std")]
pub use rcrypt_api::error::ResultExt;

pub mod validate;

#[cfg(test)]
mod tests;
