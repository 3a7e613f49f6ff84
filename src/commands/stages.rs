//! Print the stage selector.

use anyhow::Result;
use colored::Colorize;

use crate::dataset::Dataset;

pub fn execute(dataset: &Dataset) -> Result<()> {
    print!("{}", format_stages(dataset));
    Ok(())
}

pub fn format_stages(dataset: &Dataset) -> String {
    let mut output = format!(
        "{}\n",
        format!("All prompts ({})", dataset.total_prompts()).bold()
    );
    for stage in dataset.stages() {
        output.push_str(&format!(
            "{} {} {}\n",
            format!("{:>3}", stage.id).cyan(),
            stage.title,
            format!("({})", stage.prompts.len()).dimmed()
        ));
    }
    output
}
