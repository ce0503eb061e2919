//! Core types for the promptgen synthetic dataset generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the exporters:
//!
//! - [`DatasetKind`] - The three dataset shapes and their boundary names
//! - [`FieldValue`] - Closed set of scalar values a row field can hold
//! - [`Row`] - Ordered, string-keyed mapping of field values
//! - [`ParsedPlan`] - Generation intent extracted from prompt text
//! - [`GenerationOptions`] - Caller-supplied defaults for a generation call
//! - [`Dataset`] - The generated, immutable result
//!
//! # Architecture
//!
//! ```text
//! dataset-core (this crate)
//!    │
//!    ├─── dataset-generator  (prompt interpreter, synthesizers, generator)
//!    │
//!    └─── dataset-export     (CSV / JSON-Lines / text exporters, sinks)
//! ```
//!
//! # Example
//!
//! ```rust
//! use dataset_core::{Dataset, FieldValue, Row};
//!
//! let mut row = Row::new();
//! row.insert("amount", FieldValue::Float(12.5));
//! row.insert("partner", FieldValue::text("alpha"));
//!
//! let dataset = Dataset::Structured { rows: vec![row] };
//! assert_eq!(dataset.kind().as_str(), "structured");
//! ```

pub mod dataset;
pub mod kind;
pub mod plan;
pub mod values;

// Re-exports for convenience
pub use dataset::Dataset;
pub use kind::{DatasetKind, ParseKindError};
pub use plan::{ColumnSpec, GenerationOptions, ParsedPlan, SessionTokenSource};
pub use values::{FieldValue, Row};
