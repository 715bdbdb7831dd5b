//! Constant-time helpers used by the cipher modes

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of
/// different length compare unequal; the length itself is not secret.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
///
/// Every byte pair is examined; there is no early exit on the first
/// mismatching byte.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time mask generation for a single bit
///
/// Returns 0xFF if `bit` is 1 and 0x00 if it is 0. Only the lowest bit of
/// `bit` is looked at.
#[inline(always)]
pub fn ct_mask(bit: u8) -> u8 {
    0u8.wrapping_sub(bit & 1)
}

/// XOR `src` into `dst` over their common prefix
///
/// Returns the number of bytes processed.
#[inline]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) -> usize {
    let n = dst.len().min(src.len());
    for (d, s) in dst[..n].iter_mut().zip(&src[..n]) {
        *d ^= *s;
    }
    n
}
