//! Xorshift PRNG for rock spawning
//!
//! Arcade-quality randomness, not cryptographic. The firmware seeds it
//! from analog noise at boot; tests seed it with fixed values for
//! reproducible runs.

/// Fallback seed when the caller supplies zero (xorshift has a
/// fixed point at zero).
const DEFAULT_SEED: u32 = 0x6b8b_4567;

/// xorshift32 generator
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish draw in `[0, bound)`. `bound` must be non-zero.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}
