//! The 4x4 byte matrix the round functions operate on
//!
//! Blocks are loaded column-major: input byte `4 * c + r` lands at row `r`,
//! column `c`, and is read back the same way. Callers outside the block core
//! only ever see 16 sequential bytes.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Cipher state, wiped on drop
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct State {
    rows: [[u8; 4]; 4],
}

impl State {
    /// Load a block column-major
    pub fn load(block: &[u8; 16]) -> Self {
        let mut state = Self::default();
        for (i, &b) in block.iter().enumerate() {
            state.rows[i % 4][i / 4] = b;
        }
        state
    }

    /// Write the state back column-major
    pub fn store(&self, block: &mut [u8; 16]) {
        for (i, b) in block.iter_mut().enumerate() {
            *b = self.rows[i % 4][i / 4];
        }
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.rows[row][col] = value;
    }

    pub fn row(&self, row: usize) -> [u8; 4] {
        self.rows[row]
    }

    pub fn set_row(&mut self, row: usize, values: [u8; 4]) {
        self.rows[row] = values;
    }

    pub fn column(&self, col: usize) -> [u8; 4] {
        [
            self.rows[0][col],
            self.rows[1][col],
            self.rows[2][col],
            self.rows[3][col],
        ]
    }

    pub fn set_column(&mut self, col: usize, values: [u8; 4]) {
        for (row, v) in values.into_iter().enumerate() {
            self.rows[row][col] = v;
        }
    }

    /// Apply `f` to every byte of the state
    #[inline]
    pub fn map_bytes(&mut self, f: impl Fn(u8) -> u8) {
        for b in self.rows.iter_mut().flatten() {
            *b = f(*b);
        }
    }

    /// XOR a 16-byte round key, laid out like a block, into the state
    #[inline]
    pub fn add_round_key(&mut self, round_key: &[u8]) {
        for (i, &k) in round_key.iter().take(16).enumerate() {
            self.rows[i % 4][i / 4] ^= k;
        }
    }
}
