//! Block cipher modes of operation
//!
//! ECB and CBC pad to whole blocks and return a new buffer; CTR is the
//! keystream generator shared by the AEAD modes.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use rcrypt_params::utils::symmetric::AES_BLOCK_SIZE;

use crate::error::{Error, Result};

#[cfg(feature = "alloc")]
pub mod cbc;
pub mod ctr;
#[cfg(feature = "alloc")]
pub mod ecb;

#[cfg(feature = "alloc")]
pub use cbc::Cbc;
pub use ctr::Ctr;
#[cfg(feature = "alloc")]
pub use ecb::Ecb;

/// Allocate an empty vector able to hold `len` bytes without reallocating
///
/// Allocation failure is reported as [`Error::Allocation`].
#[cfg(feature = "alloc")]
pub(crate) fn try_vec(context: &'static str, len: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|_| Error::Allocation {
        context,
        requested: len,
    })?;
    Ok(out)
}

/// Number of pad bytes for a message of `len` bytes, always in `1..=16`
#[inline]
pub(crate) fn pad_len(len: usize) -> usize {
    AES_BLOCK_SIZE - len % AES_BLOCK_SIZE
}

/// Copy `data` into a new buffer followed by its padding
///
/// Every pad byte holds the pad length; an aligned message gains a full
/// block.
#[cfg(feature = "alloc")]
pub(crate) fn pad(context: &'static str, data: &[u8]) -> Result<Vec<u8>> {
    let pad = pad_len(data.len());
    let total = data.len().checked_add(pad).ok_or(Error::Allocation {
        context,
        requested: usize::MAX,
    })?;
    let mut out = try_vec(context, total)?;
    out.extend_from_slice(data);
    out.resize(total, pad as u8);
    Ok(out)
}

/// Length of the message once the padding of `data` is removed
///
/// Only the trailing byte is read; it must be in `1..=16`.
pub(crate) fn unpadded_len(context: &'static str, data: &[u8]) -> Result<usize> {
    let pad = match data.last() {
        Some(&b) => b as usize,
        None => return Err(Error::Padding { context }),
    };
    if pad == 0 || pad > AES_BLOCK_SIZE || pad > data.len() {
        return Err(Error::Padding { context });
    }
    Ok(data.len() - pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_len_range() {
        assert_eq!(pad_len(0), 16);
        assert_eq!(pad_len(1), 15);
        assert_eq!(pad_len(15), 1);
        assert_eq!(pad_len(16), 16);
        assert_eq!(pad_len(33), 15);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_pad_aligned_adds_full_block() {
        let padded = pad("test", &[0xAA; 16]).unwrap();
        assert_eq!(padded.len(), 32);
        assert!(padded[16..].iter().all(|&b| b == 16));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_pad_then_unpad() {
        for len in 0..40 {
            let data = vec![0x5Au8; len];
            let padded = pad("test", &data).unwrap();
            assert_eq!(padded.len() % 16, 0);
            assert_eq!(unpadded_len("test", &padded).unwrap(), len);
        }
    }

    #[test]
    fn test_unpadded_len_rejects_bad_trailer() {
        let mut block = [0u8; 16];
        assert_eq!(
            unpadded_len("ECB", &block),
            Err(Error::Padding { context: "ECB" })
        );
        block[15] = 17;
        assert!(unpadded_len("ECB", &block).is_err());
        block[15] = 0xFF;
        assert!(unpadded_len("ECB", &block).is_err());
        assert!(unpadded_len("ECB", &[]).is_err());
        block[15] = 16;
        assert_eq!(unpadded_len("ECB", &block), Ok(0));
    }
}
