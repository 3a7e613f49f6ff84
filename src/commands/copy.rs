//! Copy a single prompt to the clipboard.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::clipboard::Clipboard;
use crate::dataset::Dataset;
use crate::models::PromptKey;

pub fn execute(
    dataset: &Dataset,
    stage_id: u32,
    prompt_id: u32,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    let text = copy_prompt(dataset, PromptKey::new(stage_id, prompt_id), clipboard)?;
    println!("{} {}", "\u{2713} Copied!".green().bold(), text.dimmed());
    Ok(())
}

/// Write the prompt text to `clipboard` and return it.
pub fn copy_prompt<'a>(
    dataset: &'a Dataset,
    key: PromptKey,
    clipboard: &mut dyn Clipboard,
) -> Result<&'a str> {
    let stage = dataset
        .stage(key.stage_id)
        .with_context(|| format!("No stage with id {}", key.stage_id))?;
    let prompt = stage
        .prompt(key.prompt_id)
        .with_context(|| format!("Stage {} has no prompt {}", key.stage_id, key.prompt_id))?;

    clipboard
        .set_text(&prompt.text)
        .context("Failed to copy prompt to clipboard")?;
    Ok(&prompt.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::models::Stage;

    #[derive(Default)]
    struct RecordingClipboard {
        contents: Option<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![Stage::new(1, "Intro", "")
            .with_prompt(1, "Tell a story")
            .with_prompt(2, "Ask a question")])
        .unwrap()
    }

    #[test]
    fn test_copy_prompt_writes_text() {
        let dataset = dataset();
        let mut clipboard = RecordingClipboard::default();
        let text = copy_prompt(&dataset, PromptKey::new(1, 2), &mut clipboard).unwrap();
        assert_eq!(text, "Ask a question");
        assert_eq!(clipboard.contents.as_deref(), Some("Ask a question"));
    }

    #[test]
    fn test_copy_unknown_ids_fail() {
        let dataset = dataset();
        let mut clipboard = RecordingClipboard::default();

        let err = copy_prompt(&dataset, PromptKey::new(9, 1), &mut clipboard).unwrap_err();
        assert!(err.to_string().contains("No stage with id 9"));

        let err = copy_prompt(&dataset, PromptKey::new(1, 9), &mut clipboard).unwrap_err();
        assert!(err.to_string().contains("Stage 1 has no prompt 9"));
        assert!(clipboard.contents.is_none());
    }
}
