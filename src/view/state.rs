use super::filter::DerivedView;

/// Transient selection driving the derived view.
///
/// A non-empty `search_term` takes precedence over `active_stage_id`; the
/// stage id is kept but inert until the search box is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub active_stage_id: Option<u32>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage selector clicked.
    pub fn select_stage(&mut self, stage_id: u32) {
        self.active_stage_id = Some(stage_id);
        self.search_term.clear();
    }

    /// Search box edited to `value`.
    pub fn set_search(&mut self, value: impl Into<String>) {
        self.search_term = value.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut value = self.search_term.clone();
        value.push(c);
        self.set_search(value);
    }

    pub fn pop_search_char(&mut self) {
        let mut value = self.search_term.clone();
        value.pop();
        self.set_search(value);
    }

    /// "All prompts" selector clicked.
    pub fn select_all(&mut self) {
        self.active_stage_id = None;
        self.search_term.clear();
    }

    /// Clear both filters.
    pub fn reset(&mut self) {
        self.search_term.clear();
        self.active_stage_id = None;
    }

    /// Reset is only offered while nothing is displayed.
    pub fn can_reset(&self, view: &DerivedView<'_>) -> bool {
        view.is_empty()
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Whether the selector for `stage_id` should render as active.
    pub fn is_stage_highlighted(&self, stage_id: u32) -> bool {
        !self.is_searching() && self.active_stage_id == Some(stage_id)
    }

    /// Whether the "all prompts" selector should render as active.
    pub fn is_all_highlighted(&self) -> bool {
        !self.is_searching() && self.active_stage_id.is_none()
    }
}
