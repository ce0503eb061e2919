//! Deterministic random source.
//!
//! A 32-bit xorshift register. Every generation call builds its own source
//! from the resolved seed, so identical seeds always replay the same stream.

use rand::RngCore;

/// Register value used when the seed reduces to zero.
///
/// A zero register would make xorshift emit zeros forever.
pub const FALLBACK_SEED: u32 = 123_456_789;

/// Largest value `next_f64` returns.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON;

/// Uniform draws in `[0, 1)` plus the helpers built on them.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[min, max]` (inclusive) by floor scaling.
    ///
    /// The span is computed in `f64`, so extreme bounds cannot overflow;
    /// the result is clamped to `[min, max]`.
    fn random_int(&mut self, min: i64, max: i64) -> i64 {
        let span = max as f64 - min as f64 + 1.0;
        let offset = (self.next_f64() * span).floor() as i64;
        min.saturating_add(offset).min(max)
    }

    /// Uniform pick from a slice. `None` for an empty slice.
    fn sample_one<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = (self.next_f64() * items.len() as f64).floor() as usize;
        items.get(index.min(items.len() - 1))
    }

    /// Fisher-Yates shuffle, last position first, one draw per position.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = (self.next_f64() * (i + 1) as f64).floor() as usize;
            items.swap(i, j.min(i));
        }
    }
}

/// Seeded xorshift source (shifts 13, 17, 5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a source from a seed.
    ///
    /// The seed is reduced to its low 32 bits; zero maps to [`FALLBACK_SEED`].
    pub fn new(seed: i64) -> Self {
        let reduced = seed as u32;
        Self {
            state: if reduced == 0 { FALLBACK_SEED } else { reduced },
        }
    }

    /// Current register value.
    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for XorShift32 {
    fn next_f64(&mut self) -> f64 {
        let x = self.step();
        (x as f64 / u32::MAX as f64).min(BELOW_ONE)
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.step());
        let low = u64::from(self.step());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
