pub mod prompt;
pub mod stage;

pub use prompt::{Prompt, PromptKey};
pub use stage::Stage;
