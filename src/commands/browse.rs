//! Interactive browse mode.

use anyhow::Result;

use crate::clipboard::SystemClipboard;
use crate::dataset::Dataset;
use crate::tui::run_tui;
use crate::view::ViewState;

pub fn execute(dataset: Dataset, initial: ViewState, capture_mouse: bool) -> Result<()> {
    run_tui(
        dataset,
        initial,
        Box::new(SystemClipboard::new()),
        capture_mouse,
    )
}
