//! RNG construction and per-run seed derivation.
//!
//! A single [`SmallRng`] drives one whole generation run: the minority-label
//! sample and every weighted draw consume the same stream, which is what makes
//! a run reproducible from one seed value.

use rand::{SeedableRng, rngs::SmallRng};

/// SplitMix64 increment (the 64-bit golden ratio) used for per-run seed
/// derivation.
const RUN_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Builds the RNG for one generation run.
///
/// A `None` seed draws fresh entropy, so unseeded runs are independent.
pub(crate) fn run_rng(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}

/// Derives a decorrelated seed for run `run_index` of an ensemble.
#[inline]
pub(crate) fn mix_run_seed(base_seed: u64, run_index: usize) -> u64 {
    splitmix64(base_seed ^ ((run_index as u64 + 1).wrapping_mul(RUN_SEED_SPACING)))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(RUN_SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}
