//! Export formats and artifacts.

use crate::csv::to_csv;
use crate::jsonl::to_jsonl;
use crate::text::to_delimited_text;
use dataset_core::{Dataset, DatasetKind};
use std::fmt;
use std::str::FromStr;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Comma-separated values with JSON-encoded cells
    Csv,
    /// One JSON object per line
    Jsonl,
    /// Tab-separated table, JSON-Lines or raw text depending on the kind
    Txt,
}

impl ExportFormat {
    /// All formats.
    pub const ALL: [ExportFormat; 3] = [Self::Csv, Self::Jsonl, Self::Txt];

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Jsonl => "jsonl",
            Self::Txt => "txt",
        }
    }

    /// MIME type of the rendered content.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv;charset=utf-8",
            Self::Jsonl => "application/json",
            Self::Txt => "text/plain;charset=utf-8",
        }
    }

    /// File name for a dataset of the given kind: `dataset_<kind>.<ext>`.
    pub fn file_name(&self, kind: DatasetKind) -> String {
        format!("dataset_{kind}.{}", self.extension())
    }

    /// Render a dataset in this format.
    pub fn render(&self, dataset: &Dataset) -> String {
        match self {
            Self::Csv => to_csv(dataset),
            Self::Jsonl => to_jsonl(dataset),
            Self::Txt => to_delimited_text(dataset),
        }
    }

    /// Render a dataset into a named artifact ready for a sink.
    pub fn artifact(&self, dataset: &Dataset) -> ExportArtifact {
        ExportArtifact {
            file_name: self.file_name(dataset.kind()),
            mime_type: self.mime_type(),
            content: self.render(dataset),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error returned when a string is not a known export format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown export format '{0}' (expected csv, jsonl or txt)")]
pub struct ParseFormatError(pub String);

impl FromStr for ExportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "jsonl" => Ok(Self::Jsonl),
            "txt" => Ok(Self::Txt),
            other => Err(ParseFormatError(other.to_string())),
        }
    }
}

/// Rendered export handed to an [`ExportSink`](crate::ExportSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name
    pub file_name: String,
    /// MIME type of `content`
    pub mime_type: &'static str,
    /// Rendered content
    pub content: String,
}
