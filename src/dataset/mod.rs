//! The read-only collection of stages and prompts the browser displays.
//!
//! A dataset is loaded once (either the built-in set compiled into the
//! binary or a TOML file with the same schema), validated, and never mutated
//! afterwards. Everything downstream borrows from it.

mod error;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::models::{Prompt, PromptKey, Stage};

pub use error::DatasetError;

/// Built-in prompt set.
const BUILTIN_STAGES: &str = include_str!("../../data/stages.toml");

/// On-disk layout: a list of `[[stages]]` tables with nested `[[stages.prompts]]`.
#[derive(Deserialize)]
struct DatasetFile {
    #[serde(default)]
    stages: Vec<Stage>,
}

/// Validated, ordered stages. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    stages: Vec<Stage>,
}

impl Dataset {
    /// Validate and wrap a list of stages.
    pub fn new(stages: Vec<Stage>) -> Result<Self, DatasetError> {
        if stages.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut stage_ids = HashSet::new();
        for stage in &stages {
            if !stage_ids.insert(stage.id) {
                return Err(DatasetError::DuplicateStage(stage.id));
            }

            let mut prompt_ids = HashSet::new();
            for prompt in &stage.prompts {
                if !prompt_ids.insert(prompt.id) {
                    return Err(DatasetError::DuplicatePrompt {
                        stage_id: stage.id,
                        prompt_id: prompt.id,
                    });
                }
                if prompt.text.is_empty() {
                    return Err(DatasetError::EmptyPrompt {
                        stage_id: stage.id,
                        prompt_id: prompt.id,
                    });
                }
            }
        }

        Ok(Self { stages })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = toml::from_str(content)?;
        Self::new(file.stages)
    }

    /// Load a dataset file from disk.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            stages = dataset.stages.len(),
            prompts = dataset.total_prompts(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// The prompt set shipped with the binary.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_toml_str(BUILTIN_STAGES)
    }

    /// Use `path` when given, otherwise the built-in set.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage(&self, id: u32) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    pub fn prompt(&self, key: PromptKey) -> Option<&Prompt> {
        self.stage(key.stage_id)?.prompt(key.prompt_id)
    }

    pub fn total_prompts(&self) -> usize {
        self.stages.iter().map(|s| s.prompts.len()).sum()
    }
}
