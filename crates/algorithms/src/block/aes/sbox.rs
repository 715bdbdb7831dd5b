//! Forward and inverse substitution tables
//!
//! Both tables are evaluated by the compiler from the field inverse and the
//! affine maps, so they are complete before any code runs.

use super::gf8::gf_inv;

const fn forward_affine(x: u8) -> u8 {
    x ^ x.rotate_left(1) ^ x.rotate_left(2) ^ x.rotate_left(3) ^ x.rotate_left(4) ^ 0x63
}

const fn inverse_affine(x: u8) -> u8 {
    x.rotate_left(1) ^ x.rotate_left(3) ^ x.rotate_left(6) ^ 0x05
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = forward_affine(gf_inv(i as u8));
        i += 1;
    }
    table
}

const fn build_inv_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = gf_inv(inverse_affine(i as u8));
        i += 1;
    }
    table
}

/// Forward S-box
pub static SBOX: [u8; 256] = build_sbox();

/// Inverse S-box
pub static INV_SBOX: [u8; 256] = build_inv_sbox();

#[inline(always)]
pub fn sub_byte(b: u8) -> u8 {
    SBOX[b as usize]
}

#[inline(always)]
pub fn inv_sub_byte(b: u8) -> u8 {
    INV_SBOX[b as usize]
}

/// Apply the S-box to each byte of a word
#[inline]
pub fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sub_byte))
}
