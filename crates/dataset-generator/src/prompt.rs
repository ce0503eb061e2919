//! Prompt interpreter.
//!
//! Turns loose prompt text into a [`ParsedPlan`] with four independent
//! extractors (kind, row count, seed, columns). Every extractor is total:
//! a missing or malformed hint yields `None` or an empty list, never an
//! error.

use crate::vocabulary::{PromptVocabulary, VocabularyError};
use dataset_core::{ColumnSpec, DatasetKind, ParsedPlan};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Column type assumed when a column definition has none.
pub const DEFAULT_COLUMN_TYPE: &str = "string";

static BUILTIN: Lazy<PromptInterpreter> = Lazy::new(|| {
    PromptVocabulary::default()
        .compile()
        .expect("built-in prompt vocabulary must compile")
});

/// Interpret a prompt with the built-in vocabulary.
pub fn interpret(prompt: &str) -> ParsedPlan {
    PromptInterpreter::builtin().interpret(prompt)
}

/// Compiled prompt patterns.
#[derive(Debug, Clone)]
pub struct PromptInterpreter {
    unstructured_kind: Regex,
    semi_kind: Regex,
    row_count: Regex,
    seed: Regex,
    columns: Regex,
    column_separator: Regex,
}

impl PromptInterpreter {
    /// The interpreter for the built-in vocabulary.
    pub fn builtin() -> &'static PromptInterpreter {
        &BUILTIN
    }

    /// Compile an interpreter from a vocabulary.
    pub fn from_vocabulary(vocabulary: &PromptVocabulary) -> Result<Self, VocabularyError> {
        Ok(Self {
            unstructured_kind: compile("unstructured_kind", &vocabulary.unstructured_kind)?,
            semi_kind: compile("semi_kind", &vocabulary.semi_kind)?,
            row_count: compile("row_count", &vocabulary.row_count)?,
            seed: compile("seed", &vocabulary.seed)?,
            columns: compile("columns", &vocabulary.columns)?,
            column_separator: compile("column_separator", &vocabulary.column_separator)?,
        })
    }

    /// Build a plan from prompt text.
    pub fn interpret(&self, prompt: &str) -> ParsedPlan {
        ParsedPlan {
            kind: self.detect_kind(prompt),
            row_count: self.extract_row_count(prompt),
            seed: self.extract_seed(prompt),
            columns: self.extract_columns(prompt),
        }
    }

    /// Unstructured keywords win over semi-structured ones; structured otherwise.
    pub fn detect_kind(&self, prompt: &str) -> DatasetKind {
        if self.unstructured_kind.is_match(prompt) {
            DatasetKind::Unstructured
        } else if self.semi_kind.is_match(prompt) {
            DatasetKind::Semi
        } else {
            DatasetKind::Structured
        }
    }

    /// First `N rows` phrase.
    pub fn extract_row_count(&self, prompt: &str) -> Option<i64> {
        first_integer(&self.row_count, prompt)
    }

    /// First `seed=N` phrase.
    pub fn extract_seed(&self, prompt: &str) -> Option<i64> {
        first_integer(&self.seed, prompt)
    }

    /// Column definitions from the remainder of the `columns:` line.
    pub fn extract_columns(&self, prompt: &str) -> Vec<ColumnSpec> {
        let Some(captures) = self.columns.captures(prompt) else {
            return Vec::new();
        };
        let Some(list) = captures.get(1).or_else(|| captures.get(0)) else {
            return Vec::new();
        };

        self.column_separator
            .split(list.as_str())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .filter_map(parse_column)
            .collect()
    }
}

/// Split `name:type` on the first colon.
fn parse_column(part: &str) -> Option<ColumnSpec> {
    let (name, column_type) = match part.split_once(':') {
        Some((name, column_type)) => (name.trim(), column_type.trim()),
        None => (part.trim(), ""),
    };

    if name.is_empty() {
        return None;
    }

    let column_type = if column_type.is_empty() {
        DEFAULT_COLUMN_TYPE
    } else {
        column_type
    };
    Some(ColumnSpec::new(name, column_type))
}

fn first_integer(pattern: &Regex, prompt: &str) -> Option<i64> {
    pattern
        .captures(prompt)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, VocabularyError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| VocabularyError::InvalidPattern { field, source })
}
