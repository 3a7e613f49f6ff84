//! Print the derived view without entering the TUI.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::dataset::Dataset;
use crate::view::{compute_view, DerivedView, ViewState};

pub fn execute(dataset: &Dataset, state: &ViewState, json: bool) -> Result<()> {
    let view = compute_view(dataset, state);
    tracing::debug!(
        search = %state.search_term,
        stage = ?state.active_stage_id,
        stages = view.len(),
        prompts = view.prompt_count(),
        "computed view"
    );

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &view).context("Failed to serialize view")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", format_view(&view))?;
    }
    Ok(())
}

/// Human-readable listing, or the "no results" notice.
pub fn format_view(view: &DerivedView<'_>) -> String {
    if view.is_empty() {
        return format!(
            "{}\n{}\n",
            "No results".bold(),
            "Try a different search term, or drop --search/--stage to see every prompt.".dimmed()
        );
    }

    let mut output = String::new();
    for (i, stage_view) in view.stages().iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let stage = stage_view.stage;
        output.push_str(&format!("{}\n", stage.title.bold()));
        output.push_str(&format!("{}\n", stage.description.dimmed()));
        output.push_str(&format!("{}\n", "─".repeat(40).dimmed()));
        for prompt in &stage_view.prompts {
            output.push_str(&format!(
                "{} {}\n",
                format!("{:>3}.", prompt.id).cyan(),
                prompt.text
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stage;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Stage::new(1, "Intro", "Opening moves")
                .with_prompt(1, "Tell a story")
                .with_prompt(2, "Ask a question"),
            Stage::new(2, "Close", "Landing").with_prompt(3, "Call to action"),
        ])
        .unwrap()
    }

    #[test]
    fn test_format_view_lists_filtered_prompts() {
        let dataset = dataset();
        let state = ViewState {
            search_term: "story".to_string(),
            active_stage_id: None,
        };
        let output = format_view(&compute_view(&dataset, &state));

        assert!(output.contains("Intro"));
        assert!(output.contains("Tell a story"));
        assert!(!output.contains("Ask a question"));
        assert!(!output.contains("Close"));
    }

    #[test]
    fn test_format_view_empty() {
        let dataset = dataset();
        let state = ViewState {
            search_term: String::new(),
            active_stage_id: Some(7),
        };
        let output = format_view(&compute_view(&dataset, &state));
        assert!(output.contains("No results"));
    }
}
