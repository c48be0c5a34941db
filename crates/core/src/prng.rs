//! Deterministic random colors based on the Xorshift64 algorithm.
//!
//! Backs the random color grids: the same seed always yields the same colors
//! on every platform (pure integer arithmetic).

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). A seed of 0 is replaced
/// with a non-zero fallback since 0 is a fixed point of the algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns an opaque color from the low 24 bits of the next value.
    pub fn next_color(&mut self) -> Color {
        let [_, _, _, _, _, r, g, b] = self.next_u64().to_be_bytes();
        Color::rgb(r, g, b)
    }
}

/// Returns `count` opaque colors drawn from a generator seeded with `seed`.
pub fn random_colors(seed: u64, count: usize) -> Vec<Color> {
    let mut rng = Xorshift64::new(seed);
    (0..count).map(|_| rng.next_color()).collect()
}
