//! Prompt interpreter and dataset generator for promptgen.
//!
//! This crate turns free-text prompts into deterministic synthetic datasets.
//! Each generation call seeds its own xorshift source, so the same prompt,
//! options and reference time always reproduce the same dataset.
//!
//! # Architecture
//!
//! ```text
//!   prompt text
//!        │
//!        ▼
//! ┌───────────────────┐      PromptVocabulary (YAML, optional)
//! │ PromptInterpreter │◄──── kind / rows / seed / columns patterns
//! └────────┬──────────┘
//!          │ ParsedPlan
//!          ▼
//! ┌───────────────────┐
//! │ DatasetGenerator  │◄──── GenerationOptions (defaults, forced kind)
//! │                   │
//! │  - XorShift32     │
//! │  - synthesizers   │
//! └────────┬──────────┘
//!          │
//!          ▼
//!       Dataset { structured | semi | unstructured }
//! ```
//!
//! # Example
//!
//! ```rust
//! use dataset_core::{DatasetKind, GenerationOptions};
//! use dataset_generator::generate;
//!
//! let options = GenerationOptions::new(42, 100);
//! let dataset = generate("3 filas, columnas: fecha:date, importe:float", &options);
//!
//! assert_eq!(dataset.kind(), DatasetKind::Structured);
//! assert_eq!(dataset.len(), 3);
//! ```
//!
//! # Column types
//!
//! Column type hints are matched by substring, first match wins:
//!
//! - `date` - Positional `2024-MM-DD` date
//! - `int` - Integer in `[0, 10000)`
//! - `float` / `eur` - Amount in `[0, 100]` with two decimals
//! - `categorical` - One of `A`, `B`, `C`, `D`
//! - anything else - One of `alpha`, `beta`, `gamma`, `delta`, `omega`

pub mod generator;
pub mod prompt;
pub mod rng;
pub mod synth;
pub mod vocabulary;

// Re-exports for convenience
pub use generator::{default_schema, generate, DatasetGenerator, Resolved};
pub use prompt::{interpret, PromptInterpreter};
pub use rng::{RandomSource, XorShift32};
pub use vocabulary::{PromptVocabulary, VocabularyError};
