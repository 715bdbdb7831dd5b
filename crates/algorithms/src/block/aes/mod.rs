//! AES-256 block cipher (FIPS 197)
//!
//! The key is expanded once into a [`SecretBuffer`] owned by the cipher
//! value, so the schedule is wiped whenever the cipher is dropped. Round
//! functions work on the [`State`] matrix; the substitution tables are
//! compile-time constants.

use rand::{CryptoRng, RngCore};
use rcrypt_common::security::{barrier, SecretBuffer};
use rcrypt_params::utils::symmetric::{
    AES256_KEY_SIZE, AES256_ROUNDS, AES256_SCHEDULE_SIZE, AES_BLOCK_SIZE,
};
use zeroize::{Zeroize, ZeroizeOnDrop};
use core::fmt;

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Error, Result};
use crate::types::SecretBytes;

pub mod gf8;
pub mod key_schedule;
pub mod sbox;
pub mod state;

use gf8::{gf_mul, xtime};
use sbox::{inv_sub_byte, sub_byte};
pub use state::State;

/// Type-level marker for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

/// AES-256 with an owned, zeroize-on-drop round-key schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBuffer<AES256_SCHEDULE_SIZE>,
}

impl Aes256 {
    /// Expand a raw key, rejecting anything but 32 bytes
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;
        let mut raw = [0u8; AES256_KEY_SIZE];
        raw.copy_from_slice(key);
        let cipher = Self {
            round_keys: key_schedule::expand_key(&raw),
        };
        raw.zeroize();
        Ok(cipher)
    }

    fn round_key(&self, round: usize) -> &[u8] {
        &self.round_keys.as_slice()[round * AES_BLOCK_SIZE..(round + 1) * AES_BLOCK_SIZE]
    }
}

impl fmt::Debug for Aes256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes256([REDACTED])")
    }
}

fn as_block(block: &mut [u8]) -> Result<&mut [u8; AES_BLOCK_SIZE]> {
    let actual = block.len();
    block.try_into().map_err(|_| Error::Length {
        context: "AES block",
        expected: AES_BLOCK_SIZE,
        actual,
    })
}

fn sub_bytes(state: &mut State) {
    barrier::with_barriers(|| state.map_bytes(sub_byte));
}

fn inv_sub_bytes(state: &mut State) {
    barrier::with_barriers(|| state.map_bytes(inv_sub_byte));
}

/// Row `r` rotates left by `r` positions
fn shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut row = state.row(r);
        row.rotate_left(r);
        state.set_row(r, row);
    }
}

fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut row = state.row(r);
        row.rotate_right(r);
        state.set_row(r, row);
    }
}

fn mix_columns(state: &mut State) {
    for c in 0..4 {
        let [a0, a1, a2, a3] = state.column(c);
        state.set_column(
            c,
            [
                xtime(a0) ^ xtime(a1) ^ a1 ^ a2 ^ a3,
                a0 ^ xtime(a1) ^ xtime(a2) ^ a2 ^ a3,
                a0 ^ a1 ^ xtime(a2) ^ xtime(a3) ^ a3,
                xtime(a0) ^ a0 ^ a1 ^ a2 ^ xtime(a3),
            ],
        );
    }
}

fn inv_mix_columns(state: &mut State) {
    for c in 0..4 {
        let [a0, a1, a2, a3] = state.column(c);
        state.set_column(
            c,
            [
                gf_mul(a0, 14) ^ gf_mul(a1, 11) ^ gf_mul(a2, 13) ^ gf_mul(a3, 9),
                gf_mul(a0, 9) ^ gf_mul(a1, 14) ^ gf_mul(a2, 11) ^ gf_mul(a3, 13),
                gf_mul(a0, 13) ^ gf_mul(a1, 9) ^ gf_mul(a2, 14) ^ gf_mul(a3, 11),
                gf_mul(a0, 11) ^ gf_mul(a1, 13) ^ gf_mul(a2, 9) ^ gf_mul(a3, 14),
            ],
        );
    }
}

impl BlockCipher for Aes256 {
    type Algorithm = Aes256Algorithm;
    type Key = SecretBytes<AES256_KEY_SIZE>;

    fn new(key: &Self::Key) -> Self {
        Self {
            round_keys: key_schedule::expand_key(key.as_array()),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let block = as_block(block)?;
        let mut state = State::load(block);

        state.add_round_key(self.round_key(0));
        for round in 1..AES256_ROUNDS {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            state.add_round_key(self.round_key(round));
        }
        sub_bytes(&mut state);
        shift_rows(&mut state);
        state.add_round_key(self.round_key(AES256_ROUNDS));

        state.store(block);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let block = as_block(block)?;
        let mut state = State::load(block);

        state.add_round_key(self.round_key(AES256_ROUNDS));
        for round in (1..AES256_ROUNDS).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            state.add_round_key(self.round_key(round));
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        state.add_round_key(self.round_key(0));

        state.store(block);
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}
