//! Arithmetic in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1
//!
//! Everything here is `const fn` so the substitution tables can be built at
//! compile time.

/// Multiply by x (the `xtime` operation)
#[inline(always)]
pub const fn xtime(a: u8) -> u8 {
    (a << 1) ^ ((a >> 7) * 0x1B)
}

/// Multiply two field elements (shift-and-add, no branches on the operands)
pub const fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    let mut i = 0;
    while i < 8 {
        p ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    p
}

/// Multiplicative inverse, computed as a^254
///
/// Zero has no inverse; the chain maps it to zero, which is what the S-box
/// construction wants.
pub const fn gf_inv(a: u8) -> u8 {
    let a2 = gf_mul(a, a);
    let a3 = gf_mul(a2, a);
    let a6 = gf_mul(a3, a3);
    let a12 = gf_mul(a6, a6);
    let a15 = gf_mul(a12, a3);
    let a30 = gf_mul(a15, a15);
    let a60 = gf_mul(a30, a30);
    let a120 = gf_mul(a60, a60);
    let a240 = gf_mul(a120, a120);
    let a252 = gf_mul(a240, a12);
    gf_mul(a252, a2)
}
