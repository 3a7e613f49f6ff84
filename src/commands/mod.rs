pub mod browse;
pub mod copy;
pub mod list;
pub mod stages;

use crate::view::ViewState;

/// Starting state from command-line filters: stage first, then search, the
/// same order a user would apply them.
pub fn initial_view_state(stage: Option<u32>, search: Option<String>) -> ViewState {
    let mut state = ViewState::new();
    if let Some(stage_id) = stage {
        state.select_stage(stage_id);
    }
    if let Some(term) = search {
        state.set_search(term);
    }
    state
}
