use rand_chacha::{
    rand_core::{CryptoRng, RngCore, SeedableRng},
    ChaChaRng,
};

/// Environment variable that pins `test_rng` to a fixed seed.
pub const DETERMINISTIC_TEST_RNG: &str = "DETERMINISTIC_TEST_RNG";

/// A ChaCha generator expanded from a small integer seed.
pub fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// Should be used only for tests, not for any real world usage.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> impl RngCore + CryptoRng {
    seeded_rng(0x656d_6265_72)
}

/// Should be used only for tests, not for any real world usage.
/// Draws fresh entropy unless `DETERMINISTIC_TEST_RNG=1` is set.
#[cfg(feature = "std")]
pub fn test_rng() -> impl RngCore + CryptoRng {
    match std::env::var(DETERMINISTIC_TEST_RNG) {
        Ok(val) if val == "1" => seeded_rng(0x656d_6265_72),
        _ => ChaChaRng::from_entropy(),
    }
}
