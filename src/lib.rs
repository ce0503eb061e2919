//! promptgen library
//!
//! Command-line front end for generating deterministic synthetic datasets
//! from free-text prompts.
//!
//! # Features
//!
//! - Three dataset shapes: structured tables, semi-structured events, log text
//! - Prompt hints: kind keywords, `N filas`/`N rows`, `seed=N`, `columnas: a:int, ...`
//! - Reproducible output: the same prompt, seed and reference time always
//!   produce the same bytes
//! - Exports to CSV, JSON-Lines and delimited text
//!
//! # CLI Usage
//!
//! ```bash
//! # Write dataset_structured.csv and dataset_structured.jsonl into ./out
//! promptgen generate --prompt "200 filas, columnas: fecha:date, importe:float" \
//!   --format csv --format jsonl --output-dir ./out
//!
//! # Preview semi-structured events on stdout
//! promptgen preview --prompt "eventos json" --rows 40
//!
//! # Show what the interpreter extracted from a prompt
//! promptgen plan --prompt "logs, 30 rows, seed=7"
//! ```

use anyhow::Context;
use clap::Args;
use dataset_core::{DatasetKind, GenerationOptions, SessionTokenSource};
use dataset_generator::{PromptInterpreter, PromptVocabulary};
use std::path::PathBuf;

pub mod commands;

/// Prompt used when none is given.
pub const DEFAULT_PROMPT: &str = "Genera un dataset ESTRUCTURADO con 500 filas, columnas: fecha:date, cliente_id:int, importe:float EUR. Seed=42";

/// Prompt input options.
#[derive(Args, Clone, Debug)]
pub struct PromptArgs {
    /// Prompt text describing the dataset
    #[arg(long, short = 'p', conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Read the prompt from a file
    #[arg(long, value_name = "PATH")]
    pub prompt_file: Option<PathBuf>,

    /// YAML file overriding the prompt vocabulary patterns
    #[arg(long, value_name = "PATH", env = "PROMPTGEN_VOCABULARY")]
    pub vocabulary: Option<PathBuf>,
}

impl PromptArgs {
    /// The prompt text, from `--prompt`, `--prompt-file`, or the default.
    pub fn prompt_text(&self) -> anyhow::Result<String> {
        match (&self.prompt, &self.prompt_file) {
            (Some(prompt), _) => Ok(prompt.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read prompt file: {path:?}")),
            (None, None) => Ok(DEFAULT_PROMPT.to_string()),
        }
    }

    /// The interpreter for the configured vocabulary.
    pub fn interpreter(&self) -> anyhow::Result<PromptInterpreter> {
        match &self.vocabulary {
            Some(path) => {
                let vocabulary = PromptVocabulary::from_file(path)
                    .with_context(|| format!("Failed to load vocabulary from {path:?}"))?;
                tracing::info!("Using prompt vocabulary from {:?}", path);
                vocabulary
                    .compile()
                    .with_context(|| format!("Invalid vocabulary in {path:?}"))
            }
            None => Ok(PromptInterpreter::builtin().clone()),
        }
    }
}

/// Generation options shared by `generate` and `preview`.
#[derive(Args, Clone, Debug)]
pub struct GenerationArgs {
    #[command(flatten)]
    pub prompt: PromptArgs,

    /// Seed used when the prompt has no `seed=N`
    #[arg(long, default_value_t = GenerationOptions::DEFAULT_SEED, env = "PROMPTGEN_SEED", allow_negative_numbers = true)]
    pub seed: i64,

    /// Row count used when the prompt has no `N rows`
    #[arg(long, default_value_t = GenerationOptions::DEFAULT_ROW_COUNT, env = "PROMPTGEN_ROWS", allow_negative_numbers = true)]
    pub rows: i64,

    /// Force the dataset kind regardless of the prompt (structured, semi or unstructured)
    #[arg(long)]
    pub kind: Option<DatasetKind>,

    /// Instant timestamps are back-dated from (RFC 3339); defaults to now
    #[arg(long, value_name = "RFC3339")]
    pub reference_time: Option<chrono::DateTime<chrono::Utc>>,

    /// Draw session tokens from OS entropy (not reproducible)
    #[arg(long)]
    pub entropy_sessions: bool,
}

impl GenerationArgs {
    /// Build generation options from the arguments.
    pub fn options(&self) -> GenerationOptions {
        let mut options = GenerationOptions::new(self.seed, self.rows);
        if let Some(kind) = self.kind {
            options = options.with_forced_kind(kind);
        }
        if let Some(reference_time) = self.reference_time {
            options = options.with_reference_time(reference_time);
        }
        if self.entropy_sessions {
            options = options.with_session_tokens(SessionTokenSource::Entropy);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn generation_args() -> GenerationArgs {
        GenerationArgs {
            prompt: PromptArgs {
                prompt: None,
                prompt_file: None,
                vocabulary: None,
            },
            seed: 42,
            rows: 500,
            kind: None,
            reference_time: None,
            entropy_sessions: false,
        }
    }

    #[test]
    fn test_default_prompt() {
        let args = generation_args();
        assert_eq!(args.prompt.prompt_text().unwrap(), DEFAULT_PROMPT);
    }

    #[test]
    fn test_options_from_args() {
        let at: DateTime<Utc> = "2024-06-01T12:00:00Z".parse().unwrap();
        let args = GenerationArgs {
            kind: Some(DatasetKind::Semi),
            reference_time: Some(at),
            entropy_sessions: true,
            seed: -3,
            ..generation_args()
        };

        let options = args.options();
        assert_eq!(options.seed, -3);
        assert_eq!(options.row_count, 500);
        assert_eq!(options.forced_kind, Some(DatasetKind::Semi));
        assert_eq!(options.reference_time, at);
        assert_eq!(options.session_tokens, SessionTokenSource::Entropy);
    }

    #[test]
    fn test_missing_prompt_file_is_error() {
        let args = PromptArgs {
            prompt: None,
            prompt_file: Some(PathBuf::from("/nonexistent/prompt.txt")),
            vocabulary: None,
        };
        let err = args.prompt_text().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read prompt file"));
    }
}
