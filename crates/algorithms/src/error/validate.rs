//! Validation utilities for cipher primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
///
/// Takes `u64` bounds because the AEAD limits do not fit a 32-bit `usize`.
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: u64) -> Result<()> {
    if actual as u64 > max {
        return Err(Error::Length {
            context,
            expected: usize::try_from(max).unwrap_or(usize::MAX),
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of `unit`-sized blocks
///
/// On failure `expected` carries the next multiple up.
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, unit: usize) -> Result<()> {
    if actual % unit != 0 {
        return Err(Error::Length {
            context,
            expected: actual - actual % unit + unit,
            actual,
        });
    }
    Ok(())
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool, algorithm: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::Authentication { algorithm });
    }
    Ok(())
}
