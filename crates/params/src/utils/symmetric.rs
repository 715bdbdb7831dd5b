//! Constants for symmetric encryption algorithms

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of AES-256 rounds
pub const AES256_ROUNDS: usize = 14;

/// Number of 32-bit words in the AES-256 key schedule
pub const AES256_SCHEDULE_WORDS: usize = 4 * (AES256_ROUNDS + 1);

/// AES-256 expanded key size in bytes
pub const AES256_SCHEDULE_SIZE: usize = 4 * AES256_SCHEDULE_WORDS;

/// CBC initialization vector size in bytes
pub const CBC_IV_SIZE: usize = 16;

/// GCM nonce size in bytes
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// Largest GCM plaintext in bytes (2^39 - 256 bits)
pub const GCM_MAX_PLAINTEXT: u64 = (1 << 36) - 32;

/// Largest GCM additional authenticated data in bytes (2^64 - 1 bits)
pub const GCM_MAX_AAD: u64 = (1 << 61) - 1;

/// GCM-SIV nonce size in bytes
pub const SIV_NONCE_SIZE: usize = 12;

/// GCM-SIV authentication tag size in bytes
pub const SIV_TAG_SIZE: usize = 16;

/// Largest GCM-SIV plaintext in bytes
pub const SIV_MAX_PLAINTEXT: u64 = 1 << 36;

/// Largest GCM-SIV additional authenticated data in bytes
pub const SIV_MAX_AAD: u64 = 1 << 36;

/// GCM-SIV message-authentication key size in bytes
pub const SIV_AUTH_KEY_SIZE: usize = 16;

/// GCM-SIV message-encryption key size in bytes
pub const SIV_ENC_KEY_SIZE: usize = 32;
