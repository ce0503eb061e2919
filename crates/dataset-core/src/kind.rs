//! Dataset kind names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The shape of a generated dataset.
///
/// The lowercase names (`structured`, `semi`, `unstructured`) are used in
/// export file names and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    /// Tabular rows sharing one schema.
    #[default]
    Structured,
    /// Event-like rows with a base field set plus optional fields.
    Semi,
    /// A single block of free text.
    Unstructured,
}

impl DatasetKind {
    /// All kinds, in declaration order.
    pub const ALL: [DatasetKind; 3] = [Self::Structured, Self::Semi, Self::Unstructured];

    /// Boundary name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Semi => "semi",
            Self::Unstructured => "unstructured",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known dataset kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown dataset kind '{0}' (expected structured, semi or unstructured)")]
pub struct ParseKindError(pub String);

impl FromStr for DatasetKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" => Ok(Self::Structured),
            "semi" => Ok(Self::Semi),
            "unstructured" => Ok(Self::Unstructured),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}
