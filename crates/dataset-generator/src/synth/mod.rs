//! Value synthesizers for the three dataset shapes.
//!
//! Each synthesizer draws from the caller's [`RandomSource`] in a fixed
//! order, so the same stream always reproduces the same values.

pub mod semi;
pub mod session;
pub mod structured;
pub mod unstructured;

use crate::rng::RandomSource;

pub use semi::{synthesize_event_row, synthesize_optional_field, BASE_FIELDS, OPTIONAL_FIELDS};
pub use session::SessionTokens;
pub use structured::{synthesize_column_value, ColumnSynth};
pub use unstructured::{synthesize_log_line, LINE_SEPARATOR};

/// Uniform pick from a fixed word list.
pub(crate) fn pick<R: RandomSource>(rng: &mut R, words: &[&'static str]) -> &'static str {
    rng.sample_one(words).copied().unwrap_or_default()
}

/// Round half toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to `decimals` places by scaling, rounding and rescaling.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    round_half_up(value * scale) / scale
}
