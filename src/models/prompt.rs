use serde::{Deserialize, Serialize};

/// A single piece of guidance text. `id` is unique within its parent stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: u32,
    pub text: String,
}

impl Prompt {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Case-insensitive substring match against an already lower-cased needle.
    pub fn matches_lowercase(&self, needle_lower: &str) -> bool {
        self.text.to_lowercase().contains(needle_lower)
    }
}

/// Globally unique address of a prompt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PromptKey {
    pub stage_id: u32,
    pub prompt_id: u32,
}

impl PromptKey {
    pub fn new(stage_id: u32, prompt_id: u32) -> Self {
        Self {
            stage_id,
            prompt_id,
        }
    }
}
