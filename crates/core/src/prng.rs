//! Random sources for generators that draw randomness.
//!
//! Generators never call a global RNG. They take a [`RandomSource`] so a
//! caller can choose between a seeded [`Xorshift64`] (reproducible output),
//! [`Xorshift64::from_entropy`] (a fresh shape on every "regenerate"), or a
//! scripted [`Sequence`] that pins every draw in tests.

use serde::{Deserialize, Serialize};

/// A stream of uniform draws in `[0, 1)`.
///
/// Object-safe so editors can accept `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Returns the next uniformly distributed value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns an index in `[0, len)` by scaling one draw.
    ///
    /// Returns 0 when `len` is 0.
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the (13, 7, 17) shift triple. A seed of 0 is replaced with a
/// non-zero fallback because 0 is a fixed point of the recurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Creates a PRNG seeded from the thread-local OS-backed generator.
    ///
    /// Requires the `entropy` feature. Browser builds leave it off and pass a
    /// seed drawn on the JavaScript side instead.
    #[cfg(feature = "entropy")]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` divided by 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// An empty sequence yields 0.0 forever.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    values: Vec<f64>,
    cursor: usize,
}

impl Sequence {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A sequence that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for Sequence {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
