//! POLYVAL, the universal hash of GCM-SIV (RFC 8452 section 3)
//!
//! Field elements are little-endian: bit `i` of the element is bit `i % 8`
//! of byte `i / 8`. The field is GF(2)[x] / (x^128 + x^127 + x^126 + x^121
//! + 1). POLYVAL's product is `a * b * x^-128`, so each absorbed block is
//! multiplied by [`DOT`] after the plain field product.

use byteorder::{ByteOrder, LittleEndian};
use rcrypt_internal::constant_time::{ct_mask, xor_in_place};
use rcrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// x^-128 in the POLYVAL field
pub const DOT: [u8; AES_BLOCK_SIZE] = [
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x92,
];

/// Incremental POLYVAL state keyed by the authentication key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Polyval {
    h: [u8; AES_BLOCK_SIZE],
    s: [u8; AES_BLOCK_SIZE],
}

impl Polyval {
    pub fn new(h: &[u8; AES_BLOCK_SIZE]) -> Self {
        Self {
            h: *h,
            s: [0u8; AES_BLOCK_SIZE],
        }
    }

    pub fn reset(&mut self) {
        self.s = [0u8; AES_BLOCK_SIZE];
    }

    /// `S = ((S ^ X) * H) * x^-128`
    pub fn update_block(&mut self, block: &[u8; AES_BLOCK_SIZE]) {
        xor_in_place(&mut self.s, block);
        let product = gf_multiply(&self.s, &self.h);
        self.s = gf_multiply(&product, &DOT);
    }

    /// Absorb a whole segment, zero-padding a trailing partial block
    pub fn update(&mut self, data: &[u8]) {
        let mut chunks = data.chunks_exact(AES_BLOCK_SIZE);
        for chunk in &mut chunks {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.update_block(&block);
        }
        let rest = chunks.remainder();
        if !rest.is_empty() {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block[..rest.len()].copy_from_slice(rest);
            self.update_block(&block);
        }
    }

    /// Absorb the length block: both lengths in bits, little-endian
    pub fn update_lengths(&mut self, aad_len: u64, text_len: u64) {
        let mut block = [0u8; AES_BLOCK_SIZE];
        LittleEndian::write_u64(&mut block[..8], aad_len.wrapping_mul(8));
        LittleEndian::write_u64(&mut block[8..], text_len.wrapping_mul(8));
        self.update_block(&block);
    }

    pub fn finalize(&self) -> [u8; AES_BLOCK_SIZE] {
        self.s
    }
}

/// Plain field product in POLYVAL bit order (no x^-128 factor)
pub fn gf_multiply(a: &[u8; AES_BLOCK_SIZE], b: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
    let mut z = [0u8; AES_BLOCK_SIZE];
    let mut v = *a;

    for i in 0..128 {
        let take = ct_mask(b[i / 8] >> (i % 8));
        for (zk, vk) in z.iter_mut().zip(v.iter()) {
            *zk ^= vk & take;
        }

        // v = v * x: shift toward byte 15, fold x^128 back in
        let reduce = ct_mask(v[15] >> 7);
        for k in (1..AES_BLOCK_SIZE).rev() {
            v[k] = (v[k] << 1) | (v[k - 1] >> 7);
        }
        v[0] <<= 1;
        v[15] ^= 0xC2 & reduce;
        v[0] ^= 0x01 & reduce;
    }

    v.zeroize();
    z
}

/// POLYVAL over `AAD || pad || P || pad || len(AAD) || len(P)`
pub fn polyval(h: &[u8; AES_BLOCK_SIZE], aad: &[u8], plaintext: &[u8]) -> [u8; AES_BLOCK_SIZE] {
    let mut state = Polyval::new(h);
    state.update(aad);
    state.update(plaintext);
    state.update_lengths(aad.len() as u64, plaintext.len() as u64);
    state.finalize()
}
