//! Lexical patterns used by the prompt interpreter.
//!
//! Patterns are plain regular expressions matched case-insensitively. They
//! can be overridden from YAML, so a different locale only needs a new
//! vocabulary file:
//!
//! ```yaml
//! unstructured_kind: "unstructured|free text|logs"
//! row_count: '\b(\d{1,6})\s*(?:rows|records)\b'
//! ```
//!
//! Fields left out of the file keep their default pattern.

use crate::prompt::PromptInterpreter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for vocabulary loading and compilation.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// Error reading vocabulary file
    #[error("Failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse vocabulary YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A pattern is not a valid regular expression
    #[error("Invalid pattern for '{field}': {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Regular expressions recognised in prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptVocabulary {
    /// Any match selects the unstructured kind (checked first)
    pub unstructured_kind: String,

    /// Any match selects the semi-structured kind
    pub semi_kind: String,

    /// Capture group 1 holds the row count digits
    pub row_count: String,

    /// Capture group 1 holds the seed digits
    pub seed: String,

    /// Capture group 1 holds the remainder of the column list line
    pub columns: String,

    /// Separator between column definitions
    pub column_separator: String,
}

impl Default for PromptVocabulary {
    fn default() -> Self {
        Self {
            unstructured_kind: r"no\s*estructurado|unstructured|texto|logs".to_string(),
            semi_kind: r"semi[\s-]*estructurado|semi[\s-]*structured|json".to_string(),
            row_count: r"\b(\d{1,6})\s*(?:filas|rows)\b".to_string(),
            seed: r"seed\s*=?\s*(\d{1,9})".to_string(),
            columns: r"(?:columnas?|columns?)\s*:\s*([^\n]+)".to_string(),
            column_separator: r"[,;]+".to_string(),
        }
    }
}

impl PromptVocabulary {
    /// Load a vocabulary from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a vocabulary from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, VocabularyError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Compile the patterns into an interpreter.
    pub fn compile(&self) -> Result<PromptInterpreter, VocabularyError> {
        PromptInterpreter::from_vocabulary(self)
    }
}
