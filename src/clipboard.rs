//! Writing prompt text to the system clipboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Destination for copied prompt text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard. Opened lazily on first copy and kept open, since some
/// platforms drop the contents when the handle goes away.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard.set_text(text.to_owned())?;
        tracing::debug!(chars = text.chars().count(), "copied prompt to clipboard");
        Ok(())
    }
}
