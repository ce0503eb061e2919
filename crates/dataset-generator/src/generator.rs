//! Main dataset generator.

use crate::prompt::PromptInterpreter;
use crate::rng::XorShift32;
use crate::synth::{synthesize_event_row, synthesize_log_line, ColumnSynth, SessionTokens};
use dataset_core::{ColumnSpec, Dataset, DatasetKind, GenerationOptions, ParsedPlan, Row};
use tracing::{debug, info};

/// Schema used when the prompt names no columns.
pub fn default_schema() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("date", "date"),
        ColumnSpec::new("partner", "string"),
        ColumnSpec::new("amount", "float"),
    ]
}

/// Effective generation parameters after merging a plan with options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Kind to generate
    pub kind: DatasetKind,
    /// Number of rows or lines; zero when the requested count was not positive
    pub row_count: u64,
    /// Seed for the random source
    pub seed: i64,
    /// Structured schema (explicit or default)
    pub columns: Vec<ColumnSpec>,
}

impl Resolved {
    /// Merge a parsed plan with caller options.
    ///
    /// Prompt values win for row count and seed; a forced kind wins over
    /// the prompt.
    pub fn from_plan(plan: ParsedPlan, options: &GenerationOptions) -> Self {
        let row_count = plan.row_count.unwrap_or(options.row_count);
        let columns = if plan.columns.is_empty() {
            default_schema()
        } else {
            plan.columns
        };

        Self {
            kind: options.forced_kind.unwrap_or(plan.kind),
            row_count: u64::try_from(row_count).unwrap_or(0),
            seed: plan.seed.unwrap_or(options.seed),
            columns,
        }
    }
}

/// Deterministic dataset generator.
///
/// Each call to [`generate`](DatasetGenerator::generate) builds a fresh
/// random source from the resolved seed; no state carries between calls.
#[derive(Debug, Clone, Copy)]
pub struct DatasetGenerator<'a> {
    interpreter: &'a PromptInterpreter,
}

impl Default for DatasetGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetGenerator<'static> {
    /// Create a generator that uses the built-in vocabulary.
    pub fn new() -> Self {
        Self {
            interpreter: PromptInterpreter::builtin(),
        }
    }
}

impl<'a> DatasetGenerator<'a> {
    /// Create a generator that uses a custom interpreter.
    pub fn with_interpreter(interpreter: &'a PromptInterpreter) -> Self {
        Self { interpreter }
    }

    /// Interpret a prompt and merge it with options.
    pub fn resolve(&self, prompt: &str, options: &GenerationOptions) -> Resolved {
        let plan = self.interpreter.interpret(prompt);
        debug!(?plan, "Parsed prompt");
        Resolved::from_plan(plan, options)
    }

    /// Generate a dataset from a prompt.
    pub fn generate(&self, prompt: &str, options: &GenerationOptions) -> Dataset {
        let resolved = self.resolve(prompt, options);
        self.generate_resolved(&resolved, options)
    }

    /// Generate a dataset from already resolved parameters.
    pub fn generate_resolved(&self, resolved: &Resolved, options: &GenerationOptions) -> Dataset {
        info!(
            "Generating {} dataset with {} rows (seed {})",
            resolved.kind, resolved.row_count, resolved.seed
        );

        let mut rng = XorShift32::new(resolved.seed);
        match resolved.kind {
            DatasetKind::Structured => Dataset::Structured {
                rows: structured_rows(&mut rng, &resolved.columns, resolved.row_count),
            },
            DatasetKind::Semi => {
                let mut sessions = SessionTokens::new(options.session_tokens, resolved.seed);
                let rows = (0..resolved.row_count)
                    .map(|_| synthesize_event_row(&mut rng, &mut sessions, options.reference_time))
                    .collect();
                Dataset::Semi { rows }
            }
            DatasetKind::Unstructured => {
                let text = (0..resolved.row_count)
                    .map(|_| synthesize_log_line(&mut rng, options.reference_time))
                    .collect::<Vec<_>>()
                    .join("\n");
                Dataset::Unstructured { text }
            }
        }
    }
}

/// Generate a dataset with the built-in vocabulary.
pub fn generate(prompt: &str, options: &GenerationOptions) -> Dataset {
    DatasetGenerator::new().generate(prompt, options)
}

fn structured_rows(rng: &mut XorShift32, columns: &[ColumnSpec], count: u64) -> Vec<Row> {
    let synths: Vec<(&str, ColumnSynth)> = columns
        .iter()
        .map(|column| (column.name.as_str(), ColumnSynth::classify(&column.column_type)))
        .collect();

    (0..count)
        .map(|index| {
            let mut row = Row::with_capacity(synths.len());
            for (name, synth) in &synths {
                row.insert(*name, synth.synthesize(rng, index));
            }
            row
        })
        .collect()
}
