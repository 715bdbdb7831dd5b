//! GHASH, the universal hash of GCM (NIST SP 800-38D section 6.4)
//!
//! Field elements are 16-byte strings read most-significant bit first: bit 0
//! of the element is the top bit of byte 0. Reduction is by
//! x^128 + x^7 + x^2 + x + 1, which in this ordering is `0xE1` folded into
//! byte 0 whenever a bit falls off the end of byte 15.

use byteorder::{BigEndian, ByteOrder};
use rcrypt_internal::constant_time::{ct_mask, xor_in_place};
use rcrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Incremental GHASH state keyed by the hash subkey `H`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GHash {
    h: [u8; AES_BLOCK_SIZE],
    y: [u8; AES_BLOCK_SIZE],
}

impl GHash {
    /// Start a hash with `Y = 0`
    pub fn new(h: &[u8; AES_BLOCK_SIZE]) -> Self {
        Self {
            h: *h,
            y: [0u8; AES_BLOCK_SIZE],
        }
    }

    /// Clear the accumulator, keeping `H`
    pub fn reset(&mut self) {
        self.y = [0u8; AES_BLOCK_SIZE];
    }

    /// Absorb one complete field element: `Y = (Y ^ X) * H`
    pub fn update_block(&mut self, block: &[u8; AES_BLOCK_SIZE]) {
        xor_in_place(&mut self.y, block);
        self.y = gf_multiply(&self.y, &self.h);
    }

    /// Absorb a whole segment (AAD or ciphertext)
    ///
    /// A trailing partial block is zero-padded, so each call must carry a
    /// complete segment.
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

    /// Absorb the length block: both lengths in bits, big-endian
    pub fn update_lengths(&mut self, aad_len: u64, text_len: u64) {
        let mut block = [0u8; AES_BLOCK_SIZE];
        BigEndian::write_u64(&mut block[..8], aad_len.wrapping_mul(8));
        BigEndian::write_u64(&mut block[8..], text_len.wrapping_mul(8));
        self.update_block(&block);
    }

    /// Current accumulator value
    pub fn finalize(&self) -> [u8; AES_BLOCK_SIZE] {
        self.y
    }
}

/// Product of two field elements in GHASH bit order
pub fn gf_multiply(x: &[u8; AES_BLOCK_SIZE], y: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
    let mut z = [0u8; AES_BLOCK_SIZE];
    let mut v = *y;

    for i in 0..128 {
        let take = ct_mask(x[i / 8] >> (7 - i % 8));
        for (zk, vk) in z.iter_mut().zip(v.iter()) {
            *zk ^= vk & take;
        }

        // v = v * x: shift toward byte 15, reduce what falls off
        let reduce = ct_mask(v[15]);
        for k in (1..AES_BLOCK_SIZE).rev() {
            v[k] = (v[k] >> 1) | (v[k - 1] << 7);
        }
        v[0] >>= 1;
        v[0] ^= 0xE1 & reduce;
    }

    v.zeroize();
    z
}

/// GHASH over `AAD || pad || C || pad || len(AAD) || len(C)`
pub fn ghash(
    h: &[u8; AES_BLOCK_SIZE],
    aad: &[u8],
    ciphertext: &[u8],
) -> [u8; AES_BLOCK_SIZE] {
    let mut state = GHash::new(h);
    state.update(aad);
    state.update(ciphertext);
    state.update_lengths(aad.len() as u64, ciphertext.len() as u64);
    state.finalize()
}
