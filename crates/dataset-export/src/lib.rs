//! Exporters for promptgen datasets.
//!
//! This crate renders a [`Dataset`](dataset_core::Dataset) into the three
//! export formats and hands the result to an [`ExportSink`]:
//!
//! - [`to_csv`] - Header plus JSON-encoded cells
//! - [`to_jsonl`] - One compact JSON object per line
//! - [`to_delimited_text`] - Tab-separated table, JSON-Lines, or raw text
//!
//! Every exporter is a total function: empty datasets render as an empty
//! string.
//!
//! # Example
//!
//! ```rust
//! use dataset_core::{Dataset, FieldValue, Row};
//! use dataset_export::{ExportFormat, ExportSink, WriterSink};
//!
//! let row: Row = vec![("amount", FieldValue::Float(9.5))].into_iter().collect();
//! let dataset = Dataset::Structured { rows: vec![row] };
//!
//! let artifact = ExportFormat::Csv.artifact(&dataset);
//! assert_eq!(artifact.file_name, "dataset_structured.csv");
//! assert_eq!(artifact.content, "amount\n9.5");
//!
//! let mut sink = WriterSink::new(Vec::new(), "buffer");
//! sink.deliver(&artifact).unwrap();
//! ```

pub mod csv;
mod error;
pub mod format;
pub mod jsonl;
pub mod preview;
pub mod sink;
pub mod text;

pub use crate::csv::{to_csv, union_keys};
pub use error::ExportError;
pub use format::{ExportArtifact, ExportFormat, ParseFormatError};
pub use jsonl::to_jsonl;
pub use preview::{preview, PreviewLimits};
pub use sink::{DirectorySink, ExportReceipt, ExportSink, WriterSink};
pub use text::to_delimited_text;
