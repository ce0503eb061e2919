//! JSON-Lines export.

use dataset_core::{Dataset, Row};
use serde_json::json;

/// Render a dataset as JSON-Lines.
///
/// Rows are emitted as compact objects, one per line. Unstructured text
/// becomes one `{"text": ...}` object per line; an empty text block renders
/// as an empty string.
pub fn to_jsonl(dataset: &Dataset) -> String {
    match dataset {
        Dataset::Structured { rows } | Dataset::Semi { rows } => json_lines(rows),
        Dataset::Unstructured { text } if text.is_empty() => String::new(),
        Dataset::Unstructured { text } => text
            .split('\n')
            .map(|line| json!({ "text": line }).to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// One compact JSON object per row, keys in column order.
pub(crate) fn json_lines(rows: &[Row]) -> String {
    rows.iter()
        .map(|row| row.to_json().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset_core::FieldValue;

    #[test]
    fn test_rows_keep_key_order() {
        let row: Row = vec![
            ("z", FieldValue::Int(1)),
            ("a", FieldValue::text("x")),
            ("m", FieldValue::Null),
        ]
        .into_iter()
        .collect();
        let dataset = Dataset::Semi {
            rows: vec![row.clone(), row],
        };

        assert_eq!(
            to_jsonl(&dataset),
            "{\"z\":1,\"a\":\"x\",\"m\":null}\n{\"z\":1,\"a\":\"x\",\"m\":null}"
        );
    }

    #[test]
    fn test_unstructured_lines() {
        let dataset = Dataset::Unstructured {
            text: "first \"quoted\"\nsecond".to_string(),
        };
        assert_eq!(
            to_jsonl(&dataset),
            "{\"text\":\"first \\\"quoted\\\"\"}\n{\"text\":\"second\"}"
        );
    }

    #[test]
    fn test_empty_datasets() {
        assert_eq!(to_jsonl(&Dataset::Structured { rows: vec![] }), "");
        assert_eq!(
            to_jsonl(&Dataset::Unstructured {
                text: String::new()
            }),
            ""
        );
    }
}
