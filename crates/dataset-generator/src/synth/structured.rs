//! Structured column synthesizers.

use super::{pick, round_half_up};
use crate::rng::RandomSource;
use dataset_core::FieldValue;

/// Symbols for `categorical` columns.
pub const CATEGORIES: [&str; 4] = ["A", "B", "C", "D"];

/// Words for `string` and unrecognised columns.
pub const WORDS: [&str; 5] = ["alpha", "beta", "gamma", "delta", "omega"];

/// Year used by `date` columns.
pub const DATE_YEAR: u32 = 2024;

/// Synthesizer selected for a column type hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSynth {
    /// Positional date, no random draw
    Date,
    /// Integer in `[0, 10000)`
    Int,
    /// Amount in `[0, 100]` with two decimals
    Float,
    /// One of [`CATEGORIES`]
    Categorical,
    /// One of [`WORDS`]
    Text,
}

impl ColumnSynth {
    /// Classify a type hint by case-insensitive substring, first match wins.
    pub fn classify(column_type: &str) -> Self {
        let hint = column_type.to_lowercase();
        if hint.contains("date") {
            Self::Date
        } else if hint.contains("int") {
            Self::Int
        } else if hint.contains("float") || hint.contains("eur") {
            Self::Float
        } else if hint.contains("categorical") {
            Self::Categorical
        } else {
            Self::Text
        }
    }

    /// Synthesize one value for row `index`.
    pub fn synthesize<R: RandomSource>(&self, rng: &mut R, index: u64) -> FieldValue {
        match self {
            Self::Date => FieldValue::Date(positional_date(index)),
            Self::Int => FieldValue::Int((rng.next_f64() * 10_000.0).floor() as i64),
            Self::Float => FieldValue::Float(round_half_up(rng.next_f64() * 10_000.0) / 100.0),
            Self::Categorical => FieldValue::text(pick(rng, &CATEGORIES)),
            Self::Text => FieldValue::text(pick(rng, &WORDS)),
        }
    }
}

/// Synthesize one value for a column type hint at row `index`.
pub fn synthesize_column_value<R: RandomSource>(
    rng: &mut R,
    column_type: &str,
    index: u64,
) -> FieldValue {
    ColumnSynth::classify(column_type).synthesize(rng, index)
}

/// Day cycles every 28 rows, month every 28 * 12 rows.
fn positional_date(index: u64) -> String {
    let day = 1 + index % 28;
    let month = 1 + (index / 28) % 12;
    format!("{DATE_YEAR:04}-{month:02}-{day:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::XorShift32;

    #[test]
    fn test_classify_order() {
        assert_eq!(ColumnSynth::classify("DATE"), ColumnSynth::Date);
        assert_eq!(ColumnSynth::classify("datetime_int"), ColumnSynth::Date);
        assert_eq!(ColumnSynth::classify("bigint"), ColumnSynth::Int);
        assert_eq!(ColumnSynth::classify("float EUR"), ColumnSynth::Float);
        assert_eq!(ColumnSynth::classify("eur"), ColumnSynth::Float);
        assert_eq!(ColumnSynth::classify("categorical"), ColumnSynth::Categorical);
        assert_eq!(ColumnSynth::classify("string"), ColumnSynth::Text);
        assert_eq!(ColumnSynth::classify("whatever"), ColumnSynth::Text);
    }

    #[test]
    fn test_positional_date() {
        assert_eq!(positional_date(0), "2024-01-01");
        assert_eq!(positional_date(27), "2024-01-28");
        assert_eq!(positional_date(28), "2024-02-01");
        assert_eq!(positional_date(28 * 12), "2024-01-01");
    }

    #[test]
    fn test_date_consumes_no_draw() {
        let mut rng = XorShift32::new(5);
        synthesize_column_value(&mut rng, "date", 3);
        assert_eq!(rng, XorShift32::new(5));
    }

    #[test]
    fn test_float_amounts_for_seed_42() {
        let mut rng = XorShift32::new(42);
        let amounts: Vec<_> = (0..3)
            .map(|i| synthesize_column_value(&mut rng, "float", i))
            .collect();
        assert_eq!(
            amounts,
            vec![
                FieldValue::Float(0.26),
                FieldValue::Float(66.03),
                FieldValue::Float(11.1)
            ]
        );
    }

    #[test]
    fn test_int_range() {
        let mut rng = XorShift32::new(42);
        assert_eq!(synthesize_column_value(&mut rng, "int", 0), FieldValue::Int(26));
        for i in 0..1_000 {
            let value = synthesize_column_value(&mut rng, "int", i).as_i64().unwrap();
            assert!((0..10_000).contains(&value));
        }
    }

    #[test]
    fn test_float_has_two_decimals() {
        let mut rng = XorShift32::new(3);
        for i in 0..1_000 {
            let value = synthesize_column_value(&mut rng, "float", i).as_f64().unwrap();
            assert!((0.0..=100.0).contains(&value));
            let rendered = value.to_string();
            let decimals = rendered.split('.').nth(1).map_or(0, str::len);
            assert!(decimals <= 2, "{rendered} has more than two decimals");
        }
    }

    #[test]
    fn test_categorical_and_text_vocabularies() {
        let mut rng = XorShift32::new(8);
        for i in 0..200 {
            let category = synthesize_column_value(&mut rng, "categorical", i);
            assert!(CATEGORIES.contains(&category.as_str().unwrap()));
            let word = synthesize_column_value(&mut rng, "name", i);
            assert!(WORDS.contains(&word.as_str().unwrap()));
        }
    }
}
