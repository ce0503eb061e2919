//! Bounded previews of a dataset.

use crate::jsonl::json_lines;
use crate::text::tab_separated;
use dataset_core::Dataset;

/// Truncation limits for [`preview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLimits {
    /// Rows shown for structured data
    pub structured_rows: usize,
    /// Rows shown for semi-structured data
    pub semi_rows: usize,
    /// Characters shown for unstructured text
    pub text_chars: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            structured_rows: 50,
            semi_rows: 30,
            text_chars: 5000,
        }
    }
}

/// Render the head of a dataset for display.
///
/// Structured rows render as a tab-separated table, semi-structured rows as
/// JSON-Lines, and text is cut at a character boundary.
pub fn preview(dataset: &Dataset, limits: &PreviewLimits) -> String {
    match dataset {
        Dataset::Structured { rows } => {
            tab_separated(&rows[..rows.len().min(limits.structured_rows)])
        }
        Dataset::Semi { rows } => json_lines(&rows[..rows.len().min(limits.semi_rows)]),
        Dataset::Unstructured { text } => text.chars().take(limits.text_chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset_core::{FieldValue, Row};

    fn rows(count: i64) -> Vec<Row> {
        (0..count)
            .map(|i| vec![("i", FieldValue::Int(i))].into_iter().collect())
            .collect()
    }

    #[test]
    fn test_structured_preview_truncates() {
        let dataset = Dataset::Structured { rows: rows(80) };
        let text = preview(&dataset, &PreviewLimits::default());
        // Header plus 50 rows.
        assert_eq!(text.lines().count(), 51);
        assert_eq!(text.lines().last(), Some("49"));
    }

    #[test]
    fn test_semi_preview_truncates() {
        let dataset = Dataset::Semi { rows: rows(40) };
        let text = preview(&dataset, &PreviewLimits::default());
        assert_eq!(text.lines().count(), 30);
    }

    #[test]
    fn test_text_preview_respects_char_boundaries() {
        let dataset = Dataset::Unstructured {
            text: "\u{2014}".repeat(10),
        };
        let limits = PreviewLimits {
            text_chars: 3,
            ..Default::default()
        };
        assert_eq!(preview(&dataset, &limits), "\u{2014}".repeat(3));
    }

    #[test]
    fn test_short_datasets_are_unchanged() {
        let dataset = Dataset::Semi { rows: rows(2) };
        assert_eq!(preview(&dataset, &PreviewLimits::default()).lines().count(), 2);
    }
}
