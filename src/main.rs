//! Command-line interface for promptgen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Structured table from the default Spanish sample prompt, as CSV on stdout
//! promptgen generate
//!
//! # Semi-structured events, every format, into ./out
//! promptgen generate --prompt "eventos json, 1000 filas, seed=7" \
//!   --format csv --format jsonl --format txt \
//!   --output-dir ./out
//!
//! # Reproducible timestamps
//! promptgen generate --prompt "logs" --reference-time 2024-06-01T12:00:00Z
//! ```
//!
//! ## Inspect
//! ```bash
//! promptgen preview --prompt "columnas: a:int, b:categorical" --max-rows 10
//! promptgen plan --prompt "columns: id:int, name, 25 rows"
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=promptgen=info,dataset_generator=debug`).

use clap::{Parser, Subcommand};
use dataset_export::{ExportFormat, PreviewLimits};
use promptgen::commands::{run_generate, run_plan, run_preview};
use promptgen::{GenerationArgs, PromptArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptgen")]
#[command(about = "Generate deterministic synthetic datasets from free-text prompts")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset and export it
    Generate {
        #[command(flatten)]
        args: GenerationArgs,

        /// Export format: csv, jsonl or txt (repeat for several)
        #[arg(long = "format", short = 'f', default_values_t = [ExportFormat::Csv])]
        formats: Vec<ExportFormat>,

        /// Directory to write `dataset_<kind>.<ext>` files into (stdout when omitted)
        #[arg(long, short = 'o', env = "PROMPTGEN_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Print the head of a generated dataset
    Preview {
        #[command(flatten)]
        args: GenerationArgs,

        /// Rows shown for structured datasets
        #[arg(long, default_value_t = 50)]
        max_rows: usize,

        /// Rows shown for semi-structured datasets
        #[arg(long, default_value_t = 30)]
        max_events: usize,

        /// Characters shown for unstructured text
        #[arg(long, default_value_t = 5000)]
        max_chars: usize,
    },

    /// Print the plan extracted from a prompt as JSON
    Plan {
        #[command(flatten)]
        args: PromptArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            args,
            formats,
            output_dir,
        } => run_generate(&args, &formats, output_dir)?,
        Commands::Preview {
            args,
            max_rows,
            max_events,
            max_chars,
        } => {
            let limits = PreviewLimits {
                structured_rows: max_rows,
                semi_rows: max_events,
                text_chars: max_chars,
            };
            run_preview(&args, limits)?
        }
        Commands::Plan { args } => run_plan(&args)?,
    }

    Ok(())
}
