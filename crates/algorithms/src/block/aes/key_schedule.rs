//! AES-256 key expansion (FIPS-197 section 5.2)

use byteorder::{BigEndian, ByteOrder};
use rcrypt_common::security::SecretBuffer;
use rcrypt_params::utils::symmetric::{
    AES256_KEY_SIZE, AES256_SCHEDULE_SIZE, AES256_SCHEDULE_WORDS,
};
use zeroize::Zeroize;

use super::gf8::gf_mul;
use super::sbox::sub_word;

const KEY_WORDS: usize = AES256_KEY_SIZE / 4;

/// Expand a 32-byte key into 60 big-endian round-key words
///
/// The returned buffer wipes itself on drop; the working copy used here is
/// wiped before returning.
pub fn expand_key(key: &[u8; AES256_KEY_SIZE]) -> SecretBuffer<AES256_SCHEDULE_SIZE> {
    let mut w = [0u32; AES256_SCHEDULE_WORDS];
    for (i, chunk) in key.chunks_exact(4).enumerate() {
        w[i] = BigEndian::read_u32(chunk);
    }

    let mut rcon: u8 = 0x01;
    for i in KEY_WORDS..AES256_SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ ((rcon as u32) << 24);
            rcon = gf_mul(rcon, 2);
        } else if i % KEY_WORDS == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - KEY_WORDS] ^ temp;
    }

    let mut schedule = SecretBuffer::<AES256_SCHEDULE_SIZE>::zeroed();
    BigEndian::write_u32_into(&w, schedule.as_mut_slice());
    w.zeroize();
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(schedule: &[u8], i: usize) -> u32 {
        BigEndian::read_u32(&schedule[4 * i..4 * i + 4])
    }

    #[test]
    fn test_fips197_a3_expansion() {
        let key: [u8; 32] = hex::decode(
            "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        )
        .unwrap()
        .try_into()
        .unwrap();
        let schedule = expand_key(&key);
        let bytes = schedule.as_slice();

        assert_eq!(&bytes[..32], &key[..]);

        let expected_8_15 = [
            0x9ba35411, 0x8e6925af, 0xa51a8b5f, 0x2067fcde, 0xa8b09c1a, 0x93d194cd, 0xbe49846e,
            0xb75d5b9a,
        ];
        for (i, &w) in expected_8_15.iter().enumerate() {
            assert_eq!(word(bytes, 8 + i), w, "w[{}]", 8 + i);
        }

        let expected_56_59 = [0xfe4890d1, 0xe6188d0b, 0x046df344, 0x706c631e];
        for (i, &w) in expected_56_59.iter().enumerate() {
            assert_eq!(word(bytes, 56 + i), w, "w[{}]", 56 + i);
        }
    }
}
