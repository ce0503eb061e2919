//! The generated dataset.

use crate::kind::DatasetKind;
use crate::values::Row;
use serde::Serialize;

/// A generated dataset.
///
/// Exactly one shape is populated. Datasets are never mutated after
/// generation; exporters only borrow them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Dataset {
    /// Rows sharing one schema
    Structured { rows: Vec<Row> },

    /// Rows with a base field set plus per-row optional fields
    Semi { rows: Vec<Row> },

    /// Newline-delimited text block
    Unstructured { text: String },
}

impl Dataset {
    /// The kind of this dataset.
    pub fn kind(&self) -> DatasetKind {
        match self {
            Self::Structured { .. } => DatasetKind::Structured,
            Self::Semi { .. } => DatasetKind::Semi,
            Self::Unstructured { .. } => DatasetKind::Unstructured,
        }
    }

    /// Rows of a structured or semi-structured dataset.
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            Self::Structured { rows } | Self::Semi { rows } => Some(rows.as_slice()),
            Self::Unstructured { .. } => None,
        }
    }

    /// Text block of an unstructured dataset.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Unstructured { text } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Number of rows, or lines for unstructured text.
    pub fn len(&self) -> usize {
        match self {
            Self::Structured { rows } | Self::Semi { rows } => rows.len(),
            Self::Unstructured { text } if text.is_empty() => 0,
            Self::Unstructured { text } => text.lines().count(),
        }
    }

    /// Whether the dataset has no rows or text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
