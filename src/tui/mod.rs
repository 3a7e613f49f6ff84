//! Interactive prompt browser.
//!
//! Layout:
//! - Header with title and the search box
//! - Stage selector ("all prompts" plus one entry per stage)
//! - Prompt cards for the current derived view, or a "no results" panel
//! - Footer with keybinds or the last clipboard error

mod app;
pub mod event_handler;
pub mod renderer;
pub mod state;
mod theme;

use anyhow::Result;

use crate::clipboard::Clipboard;
use crate::dataset::Dataset;
use crate::view::ViewState;

pub use app::TuiApp;
pub use event_handler::{handle_key_event, handle_mouse_event, KeyEventResult};
pub use state::{BrowserState, Focus};

/// Entry point for browse mode.
pub fn run_tui(
    dataset: Dataset,
    initial: ViewState,
    clipboard: Box<dyn Clipboard>,
    capture_mouse: bool,
) -> Result<()> {
    let mut app = TuiApp::new(dataset, initial, clipboard, capture_mouse)?;
    app.run()
}
