//! Deterministic random number generation for simulated play.
//!
//! The engine itself is fully deterministic; randomness only enters through
//! drivers that stand in for human voters. Same seed, same game.
//!
//! ```
//! use elimination_engine::core::{GameRng, OptionCount};
//!
//! let mut rng = GameRng::new(42);
//! let mut other = GameRng::new(42);
//! assert_eq!(rng.pick_option(OptionCount::Three), other.pick_option(OptionCount::Three));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::option::{OptionCount, OptionId};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform pick among the options active under `option_count`.
    pub fn pick_option(&mut self, option_count: OptionCount) -> OptionId {
        let active = option_count.active();
        active[self.inner.gen_range(0..active.len())]
    }
}
