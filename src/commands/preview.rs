//! Preview command handler.

use crate::GenerationArgs;
use dataset_export::{preview, PreviewLimits};
use dataset_generator::DatasetGenerator;

/// Run the preview command, printing the head of the dataset to stdout.
pub fn run_preview(args: &GenerationArgs, limits: PreviewLimits) -> anyhow::Result<()> {
    let prompt = args.prompt.prompt_text()?;
    let interpreter = args.prompt.interpreter()?;
    let options = args.options();

    let dataset = DatasetGenerator::with_interpreter(&interpreter).generate(&prompt, &options);
    tracing::debug!("Previewing {} dataset with {} rows", dataset.kind(), dataset.len());

    println!("{}", preview(&dataset, &limits));
    Ok(())
}
