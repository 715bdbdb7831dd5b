//! Counter-mode keystream
//!
//! Encrypts successive counter blocks and XORs the result into the data. The
//! counter layout is a type parameter: GCM increments the last four bytes as
//! a big-endian integer, GCM-SIV the first four bytes as a little-endian
//! one. Both wrap modulo 2^32 and leave the other twelve bytes alone.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use core::marker::PhantomData;
use rcrypt_common::security::barrier;
use rcrypt_params::utils::symmetric::AES_BLOCK_SIZE;
use zeroize::Zeroizing;

use crate::block::BlockCipher;
use crate::error::{validate, Result};
use crate::types::sealed::Sealed;

/// How the 32-bit counter sits inside the 16-byte counter block
pub trait CounterIncrement: Sealed {
    /// Add `n` to the counter field, wrapping modulo 2^32
    fn add(block: &mut [u8; AES_BLOCK_SIZE], n: u32);

    /// Add one to the counter field
    #[inline]
    fn increment(block: &mut [u8; AES_BLOCK_SIZE]) {
        Self::add(block, 1);
    }
}

/// Counter in bytes 12..16, big-endian (GCM)
#[derive(Debug, Clone, Copy)]
pub enum BigEndian32 {}

/// Counter in bytes 0..4, little-endian (GCM-SIV)
#[derive(Debug, Clone, Copy)]
pub enum LittleEndian32 {}

impl Sealed for BigEndian32 {}
impl Sealed for LittleEndian32 {}

impl CounterIncrement for BigEndian32 {
    #[inline]
    fn add(block: &mut [u8; AES_BLOCK_SIZE], n: u32) {
        let field = &mut block[12..];
        let value = BigEndian::read_u32(field);
        BigEndian::write_u32(field, value.wrapping_add(n));
    }
}

impl CounterIncrement for LittleEndian32 {
    #[inline]
    fn add(block: &mut [u8; AES_BLOCK_SIZE], n: u32) {
        let field = &mut block[..4];
        let value = LittleEndian::read_u32(field);
        LittleEndian::write_u32(field, value.wrapping_add(n));
    }
}

/// Counter mode over a borrowed block cipher
pub struct Ctr<'a, B: BlockCipher, I: CounterIncrement> {
    cipher: &'a B,
    initial_block: Zeroizing<[u8; AES_BLOCK_SIZE]>,
    counter_block: Zeroizing<[u8; AES_BLOCK_SIZE]>,
    keystream: Zeroizing<[u8; AES_BLOCK_SIZE]>,
    keystream_pos: usize,
    _increment: PhantomData<I>,
}

impl<'a, B: BlockCipher, I: CounterIncrement> Ctr<'a, B, I> {
    /// Start a keystream whose first block is `E(initial_block)`
    pub fn new(cipher: &'a B, initial_block: [u8; AES_BLOCK_SIZE]) -> Self {
        Self {
            cipher,
            initial_block: Zeroizing::new(initial_block),
            counter_block: Zeroizing::new(initial_block),
            keystream: Zeroizing::new([0u8; AES_BLOCK_SIZE]),
            keystream_pos: AES_BLOCK_SIZE,
            _increment: PhantomData,
        }
    }

    /// The counter block the next keystream block will be generated from
    pub fn counter_block(&self) -> [u8; AES_BLOCK_SIZE] {
        *self.counter_block
    }

    fn generate_keystream(&mut self) -> Result<()> {
        barrier::compiler_fence_seq_cst();

        *self.keystream = *self.counter_block;
        self.cipher.encrypt_block(&mut self.keystream[..])?;
        I::increment(&mut self.counter_block);
        self.keystream_pos = 0;

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// XOR the keystream into `data` (encryption and decryption are the same)
    ///
    /// A trailing partial block consumes only the leading bytes of its
    /// keystream block; the rest is used by the next call.
    pub fn process(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            if self.keystream_pos >= AES_BLOCK_SIZE {
                self.generate_keystream()?;
            }
            *byte ^= self.keystream[self.keystream_pos];
            self.keystream_pos += 1;
        }
        Ok(())
    }

    /// Write raw keystream into `output`, starting from a block boundary
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.iter_mut().for_each(|b| *b = 0);
        self.keystream_pos = AES_BLOCK_SIZE;
        self.process(output)
    }

    /// Reposition the keystream to `byte_offset` bytes past the start
    ///
    /// Fails if the offset lies beyond the 2^32 blocks the counter can
    /// address.
    pub fn seek(&mut self, byte_offset: u64) -> Result<()> {
        let block_index = byte_offset / AES_BLOCK_SIZE as u64;
        validate::parameter(
            block_index <= u32::MAX as u64,
            "byte_offset",
            "beyond the 32-bit counter space",
        )?;

        *self.counter_block = *self.initial_block;
        I::add(&mut self.counter_block, block_index as u32);
        self.keystream_pos = AES_BLOCK_SIZE;

        let within = (byte_offset % AES_BLOCK_SIZE as u64) as usize;
        if within > 0 {
            self.generate_keystream()?;
            self.keystream_pos = within;
        }
        Ok(())
    }
}
