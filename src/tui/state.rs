//! State types for the browser TUI.

use std::time::Instant;

use crate::dataset::Dataset;
use crate::models::PromptKey;
use crate::view::{compute_view, CopyAcks, DerivedView, ViewState};

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    Search,
    Stages,
    #[default]
    Prompts,
}

impl Focus {
    /// Tab order between the two list panes.
    pub fn next(self) -> Self {
        match self {
            Focus::Stages => Focus::Prompts,
            Focus::Prompts | Focus::Search => Focus::Stages,
        }
    }
}

/// Content scroll tracking.
#[derive(Debug, Default)]
pub struct ScrollState {
    /// First visible content line.
    pub offset: u16,
    /// Viewport height in lines, updated on every render.
    pub viewport_height: u16,
}

impl ScrollState {
    /// Adjust the offset so lines `start..end` are on screen, preferring `start`.
    pub fn ensure_visible(&mut self, start: u16, end: u16) {
        if start < self.offset {
            self.offset = start;
        } else if end > self.offset.saturating_add(self.viewport_height) {
            self.offset = end.saturating_sub(self.viewport_height).min(start);
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// Everything the browser mutates in response to input.
///
/// `view_state` is the only input to the filter; the rest is cursor and
/// presentation bookkeeping.
#[derive(Debug, Default)]
pub struct BrowserState {
    pub view_state: ViewState,
    pub focus: Focus,
    /// Cursor in the stage selector: 0 is "all prompts", `i` is stage `i - 1`.
    pub stage_cursor: usize,
    /// Index into the visible prompts of the current view.
    pub selected_prompt: usize,
    pub scroll: ScrollState,
    pub acks: CopyAcks,
    /// Transient footer message, cleared on the next key press.
    pub status_message: Option<String>,
}

impl BrowserState {
    pub fn new(view_state: ViewState, dataset: &Dataset) -> Self {
        let stage_cursor = view_state
            .active_stage_id
            .and_then(|id| dataset.stages().iter().position(|s| s.id == id))
            .map_or(0, |pos| pos + 1);

        Self {
            view_state,
            stage_cursor,
            ..Self::default()
        }
    }

    /// Recompute the derived view from scratch.
    pub fn view<'a>(&self, dataset: &'a Dataset) -> DerivedView<'a> {
        compute_view(dataset, &self.view_state)
    }

    /// Number of entries in the stage selector, including "all prompts".
    pub fn selector_len(dataset: &Dataset) -> usize {
        dataset.stages().len() + 1
    }

    pub fn move_stage_cursor(&mut self, delta: isize, dataset: &Dataset) {
        let max = Self::selector_len(dataset) - 1;
        self.stage_cursor = self.stage_cursor.saturating_add_signed(delta).min(max);
    }

    /// Apply the entry under the selector cursor.
    pub fn apply_stage_cursor(&mut self, dataset: &Dataset) {
        match self.stage_cursor.checked_sub(1) {
            None => self.view_state.select_all(),
            Some(index) => match dataset.stages().get(index) {
                Some(stage) => self.view_state.select_stage(stage.id),
                None => return,
            },
        }
        self.view_changed();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.view_state.push_search_char(c);
        self.view_changed();
    }

    pub fn pop_search_char(&mut self) {
        self.view_state.pop_search_char();
        self.view_changed();
    }

    /// Clear both filters, but only while the view is empty.
    pub fn reset_if_empty(&mut self, dataset: &Dataset) -> bool {
        let can_reset = self.view_state.can_reset(&self.view(dataset));
        if can_reset {
            self.view_state.reset();
            self.stage_cursor = 0;
            self.view_changed();
        }
        can_reset
    }

    fn view_changed(&mut self) {
        self.selected_prompt = 0;
        self.scroll.reset();
    }

    /// Move the prompt selection within `visible` prompts.
    pub fn move_prompt(&mut self, delta: isize, visible: usize) {
        if visible == 0 {
            self.selected_prompt = 0;
            return;
        }
        self.selected_prompt = self
            .selected_prompt
            .saturating_add_signed(delta)
            .min(visible - 1);
    }

    pub fn select_first_prompt(&mut self) {
        self.selected_prompt = 0;
    }

    pub fn select_last_prompt(&mut self, visible: usize) {
        self.selected_prompt = visible.saturating_sub(1);
    }

    /// Keep the selection inside the view after it changed size.
    pub fn clamp_selection(&mut self, visible: usize) {
        self.move_prompt(0, visible);
    }

    pub fn selected_key(&self, view: &DerivedView<'_>) -> Option<PromptKey> {
        view.prompt_key_at(self.selected_prompt)
    }

    /// Show the acknowledgement for `key`.
    pub fn record_copy(&mut self, key: PromptKey, now: Instant) {
        self.acks.trigger(key, now);
    }

    /// Per-tick housekeeping.
    pub fn tick(&mut self, now: Instant) {
        self.acks.prune(now);
    }
}
