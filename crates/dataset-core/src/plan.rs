//! Generation plans and caller options.

use crate::kind::DatasetKind;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// One column of an explicit structured schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name as written in the prompt
    pub name: String,

    /// Free-form type hint (`date`, `int`, `float`, `categorical`, ...)
    #[serde(rename = "type")]
    pub column_type: String,
}

impl ColumnSpec {
    /// Create a new column spec.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }
}

/// Generation intent extracted from a prompt.
///
/// `None` fields mean the prompt did not mention them and the caller's
/// defaults apply. `columns` is empty when no schema marker was found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedPlan {
    /// Kind inferred from keywords
    pub kind: DatasetKind,

    /// Row count from an `N rows` phrase
    pub row_count: Option<i64>,

    /// Seed from a `seed=N` phrase
    pub seed: Option<i64>,

    /// Explicit column schema, in prompt order
    pub columns: Vec<ColumnSpec>,
}

/// Where session tokens for semi-structured rows come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionTokenSource {
    /// Derived from the effective seed; reproducible.
    #[default]
    Seeded,
    /// Drawn from the thread-local OS-seeded RNG. NOT reproducible.
    Entropy,
}

/// Caller-supplied defaults for a generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Seed used when the prompt does not carry one
    pub seed: i64,

    /// Row count used when the prompt does not carry one
    pub row_count: i64,

    /// Kind that overrides whatever the prompt implies
    pub forced_kind: Option<DatasetKind>,

    /// Instant that generated timestamps are back-dated from
    pub reference_time: DateTime<Utc>,

    /// Source of session tokens in semi-structured rows
    pub session_tokens: SessionTokenSource,
}

impl GenerationOptions {
    /// Default seed.
    pub const DEFAULT_SEED: i64 = 42;

    /// Default row count.
    pub const DEFAULT_ROW_COUNT: i64 = 500;

    /// Create options with the given seed and row count.
    ///
    /// The reference time is the current time truncated to whole seconds.
    pub fn new(seed: i64, row_count: i64) -> Self {
        Self {
            seed,
            row_count,
            forced_kind: None,
            reference_time: Utc::now().trunc_subsecs(0),
            session_tokens: SessionTokenSource::default(),
        }
    }

    /// Force the dataset kind regardless of the prompt.
    pub fn with_forced_kind(mut self, kind: DatasetKind) -> Self {
        self.forced_kind = Some(kind);
        self
    }

    /// Pin the reference time so timestamps are reproducible.
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = reference_time;
        self
    }

    /// Select the session token source.
    pub fn with_session_tokens(mut self, source: SessionTokenSource) -> Self {
        self.session_tokens = source;
        self
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED, Self::DEFAULT_ROW_COUNT)
    }
}
