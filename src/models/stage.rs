use serde::{Deserialize, Serialize};

use super::prompt::{Prompt, PromptKey};

/// One step of the preparation guide: an ordered group of prompts.
///
/// Titles conventionally read `"<label>: <topic>"`; the stage selector shows
/// the label and topic on separate lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}

impl Stage {
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            prompts: Vec::new(),
        }
    }

    /// Builder-style helper used by fixtures and tests.
    pub fn with_prompt(mut self, id: u32, text: impl Into<String>) -> Self {
        self.prompts.push(Prompt::new(id, text));
        self
    }

    /// Text before the first `:`, or the whole title.
    pub fn short_title(&self) -> &str {
        match self.title.split_once(':') {
            Some((head, _)) => head.trim_end(),
            None => &self.title,
        }
    }

    /// Trimmed text after the first `:`, if any.
    pub fn subtitle(&self) -> Option<&str> {
        self.title
            .split_once(':')
            .map(|(_, tail)| tail.trim())
            .filter(|tail| !tail.is_empty())
    }

    pub fn prompt(&self, prompt_id: u32) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == prompt_id)
    }

    pub fn key_for(&self, prompt: &Prompt) -> PromptKey {
        PromptKey::new(self.id, prompt.id)
    }
}
