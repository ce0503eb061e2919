//! Plan command handler.

use crate::PromptArgs;

/// Run the plan command, printing the parsed plan as JSON.
pub fn run_plan(args: &PromptArgs) -> anyhow::Result<()> {
    let prompt = args.prompt_text()?;
    let plan = args.interpreter()?.interpret(&prompt);

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
