//! Seeded simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every random draw the core makes (batch size, weapon choice, spawn point
//! choice) goes through a `SimRng` seeded from a single `u64`.  The same seed
//! and the same host responses always reproduce the same raid.
//!
//! Components that need their own stream derive one with [`SimRng::child`]
//! instead of sharing, so adding draws in one component never perturbs
//! another.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{KtError, KtResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only from the single control thread that delivers timer callbacks.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy, for hosts that don't care about replays.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Draw a count uniformly from `min..=max`.
    ///
    /// Errors instead of panicking when `min > max`.
    pub fn gen_count(&mut self, min: u32, max: u32) -> KtResult<u32> {
        if min > max {
            return Err(KtError::InvalidRange { min, max });
        }
        Ok(self.0.gen_range(min..=max))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
