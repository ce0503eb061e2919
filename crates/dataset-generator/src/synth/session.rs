//! Session token source.
//!
//! Session tokens never draw from the main stream. The seeded variant runs
//! its own xorshift register derived from the effective seed; the entropy
//! variant uses the thread-local RNG and is NOT reproducible.

use crate::rng::{RandomSource, XorShift32};
use dataset_core::SessionTokenSource;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Token length in characters.
pub const TOKEN_LENGTH: usize = 8;

/// Token alphabet (base 36, lowercase).
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Mixed into the seed so the session stream differs from the main stream.
const SESSION_STREAM_SALT: i64 = 0x9E37_79B9;

/// Generator for `session` field values.
#[derive(Debug)]
pub enum SessionTokens {
    /// Reproducible stream derived from the seed
    Seeded(XorShift32),
    /// Thread-local OS-seeded RNG
    Entropy(ThreadRng),
}

impl SessionTokens {
    /// Build the token source selected in options for an effective seed.
    pub fn new(source: SessionTokenSource, seed: i64) -> Self {
        match source {
            SessionTokenSource::Seeded => Self::Seeded(XorShift32::new(seed ^ SESSION_STREAM_SALT)),
            SessionTokenSource::Entropy => Self::Entropy(rand::thread_rng()),
        }
    }

    /// Next 8-character alphanumeric token.
    pub fn next_token(&mut self) -> String {
        (0..TOKEN_LENGTH)
            .map(|_| {
                let index = match self {
                    Self::Seeded(rng) => rng.random_int(0, ALPHABET.len() as i64 - 1) as usize,
                    Self::Entropy(rng) => rng.gen_range(0..ALPHABET.len()),
                };
                char::from(ALPHABET[index])
            })
            .collect()
    }
}
