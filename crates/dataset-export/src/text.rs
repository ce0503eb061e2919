//! Delimited text export.

use crate::jsonl::json_lines;
use dataset_core::{Dataset, Row};

/// Render a dataset as delimited text.
///
/// Structured rows become a tab-separated table, semi-structured rows stay
/// JSON-Lines, and unstructured text is returned unchanged.
pub fn to_delimited_text(dataset: &Dataset) -> String {
    match dataset {
        Dataset::Structured { rows } => tab_separated(rows),
        Dataset::Semi { rows } => json_lines(rows),
        Dataset::Unstructured { text } => text.clone(),
    }
}

/// Tab-separated header plus rows; the header comes from the first row.
pub(crate) fn tab_separated(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let header: Vec<&str> = first.keys().collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header.join("\t"));
    for row in rows {
        let cells: Vec<String> = header
            .iter()
            .map(|key| row.get(key).map(ToString::to_string).unwrap_or_default())
            .collect();
        lines.push(cells.join("\t"));
    }
    lines.join("\n")
}
