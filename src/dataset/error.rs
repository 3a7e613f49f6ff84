use std::path::PathBuf;

use thiserror::Error;

/// Reasons a dataset is rejected at load time.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("dataset contains no stages")]
    Empty,

    #[error("duplicate stage id {0}")]
    DuplicateStage(u32),

    #[error("stage {stage_id} has duplicate prompt id {prompt_id}")]
    DuplicatePrompt { stage_id: u32, prompt_id: u32 },

    #[error("stage {stage_id} prompt {prompt_id} has empty text")]
    EmptyPrompt { stage_id: u32, prompt_id: u32 },
}
