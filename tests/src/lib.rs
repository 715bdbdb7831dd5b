//! Shared helpers for the rcrypt integration and property tests

use std::sync::Once;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

static TRACING: Once = Once::new();

/// Install a fmt subscriber that writes through the test harness
///
/// Mode events show up with `cargo test -- --nocapture`; the level is taken
/// from `RUST_LOG` and defaults to `debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic RNG for reproducible inputs
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `len` pseudo-random bytes from `rng`
pub fn random_bytes(rng: &mut impl RngCore, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}

/// Lengths around every block boundary up to three blocks
pub const BOUNDARY_LENGTHS: &[usize] = &[0, 1, 15, 16, 17, 31, 32, 33, 47, 48, 49];
