//! Generate command handler.

use crate::GenerationArgs;
use anyhow::Context;
use dataset_export::{DirectorySink, ExportFormat, ExportSink, WriterSink};
use dataset_generator::DatasetGenerator;
use std::path::PathBuf;
use std::time::Instant;

/// Run the generate command.
///
/// Writes one artifact per format into `output_dir`, or to stdout when no
/// directory is given.
pub fn run_generate(
    args: &GenerationArgs,
    formats: &[ExportFormat],
    output_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let prompt = args.prompt.prompt_text()?;
    let interpreter = args.prompt.interpreter()?;
    let options = args.options();

    let start = Instant::now();
    let generator = DatasetGenerator::with_interpreter(&interpreter);
    let resolved = generator.resolve(&prompt, &options);
    let dataset = generator.generate_resolved(&resolved, &options);
    tracing::info!(
        "Generated {} {} rows in {:?}",
        dataset.len(),
        dataset.kind(),
        start.elapsed()
    );

    let mut sink: Box<dyn ExportSink> = match &output_dir {
        Some(dir) => Box::new(DirectorySink::new(dir)),
        None => Box::new(WriterSink::stdout()),
    };

    for format in formats {
        let artifact = format.artifact(&dataset);
        let receipt = sink
            .deliver(&artifact)
            .with_context(|| format!("Failed to export {}", artifact.file_name))?;
        tracing::info!(
            "Exported {} ({}, {} bytes) to {}",
            artifact.file_name,
            artifact.mime_type,
            receipt.bytes_written,
            receipt.destination
        );
    }

    Ok(())
}
