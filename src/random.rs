//! Seedable pseudo-random source
//!
//! Xorshift generator whose state is expanded from the seed with a
//! SplitMix64 step, so small or zero seeds still produce a good sequence.
//! Seed it once at startup from whatever entropy the board provides.

/// Pseudo-random number generator shared by the scheduler and animations
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a generator from a seed
    pub const fn new(seed: u64) -> Self {
        let mut state = split_mix(seed);
        if state == 0 {
            state = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    /// Next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Next raw 32-bit value
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform value in `0..bound`
    ///
    /// `bound` must not be zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "empty random range");
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }

    /// Uniform value in `min..max` (upper bound excluded)
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        assert!(min < max, "empty random range {min}..{max}");
        let span = (max - min) as u32;
        min + self.below(span) as i32
    }

    /// `true` with probability `1 / one_in`
    pub fn one_in(&mut self, one_in: u32) -> bool {
        self.below(one_in) == 0
    }

    /// Random sign, `1.0` or `-1.0`
    pub fn sign(&mut self) -> f32 {
        if self.one_in(2) { 1.0 } else { -1.0 }
    }
}

const fn split_mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
