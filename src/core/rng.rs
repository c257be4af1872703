//! Deterministic random number generation for deck order and dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for deck shuffling and dice
//!
//! ## Usage
//!
//! ```
//! use astro_pictionary::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Deck and dice draw from separate streams
//! let mut deck_rng = rng.for_context("deck");
//! let mut dice_rng = rng.for_context("dice");
//!
//! let roll = dice_rng.roll_die(6);
//! assert!((1..=6).contains(&roll));
//!
//! let mut cards = vec![1, 2, 3, 4, 5];
//! deck_rng.shuffle(&mut cards);
//! assert_eq!(cards.len(), 5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Seeded RNG backing every random decision in a session.
///
/// Uses ChaCha8 so a session built from a fixed seed replays the same
/// deck order and dice rolls.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The context seed is an FNV-1a fold of the seed bytes (little endian)
    /// followed by the context bytes, so it is stable across toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let bytes = self.seed.to_le_bytes();
        let hash = bytes
            .iter()
            .chain(context.as_bytes())
            .fold(FNV_OFFSET, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        Self::new(hash)
    }

    /// Uniform index in `0..=max`.
    pub fn gen_index(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Roll a die with `faces` sides, returning a value in `1..=faces`.
    pub fn roll_die(&mut self, faces: u32) -> u32 {
        self.inner.gen_range(1..=faces.max(1))
    }

    /// Fisher–Yates shuffle in place.
    ///
    /// Walks from the last index down to 1, swapping each slot with a
    /// uniformly chosen slot in `0..=i`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i);
            slice.swap(i, j);
        }
    }
}
