//! CSV export.
//!
//! Cells hold the compact JSON encoding of their value, so strings are
//! quoted with embedded quotes escaped and numbers are written bare.
//! Missing and null cells are written as an empty JSON string (`""`).

use dataset_core::{Dataset, FieldValue, Row};
use std::collections::HashSet;

/// Render a dataset as CSV.
///
/// Structured data takes its header from the first row; semi-structured data
/// uses the union of all keys in first-seen order. Unstructured text has no
/// tabular shape and renders as an empty string.
pub fn to_csv(dataset: &Dataset) -> String {
    match dataset {
        Dataset::Structured { rows } => {
            let header: Vec<&str> = rows
                .first()
                .map(|row| row.keys().collect())
                .unwrap_or_default();
            render(&header, rows)
        }
        Dataset::Semi { rows } => render(&union_keys(rows), rows),
        Dataset::Unstructured { .. } => String::new(),
    }
}

/// All keys across rows, in the order they first appear.
pub fn union_keys(rows: &[Row]) -> Vec<&str> {
    let mut seen = HashSet::new();
    rows.iter()
        .flat_map(Row::keys)
        .filter(|key| seen.insert(*key))
        .collect()
}

fn render(header: &[&str], rows: &[Row]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header.join(","));
    for row in rows {
        let cells: Vec<String> = header.iter().map(|key| json_cell(row.get(key))).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

fn json_cell(value: Option<&FieldValue>) -> String {
    match value {
        None | Some(FieldValue::Null) => "\"\"".to_string(),
        Some(value) => value.to_json().to_string(),
    }
}
