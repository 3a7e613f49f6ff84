//! Event handling for TUI keyboard and mouse input.

use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

use super::state::{BrowserState, Focus};
use crate::dataset::Dataset;
use crate::models::PromptKey;

/// Prompts skipped by PageUp/PageDown.
pub const PAGE_STEP: isize = 5;

/// Prompts moved per mouse wheel notch.
pub const WHEEL_STEP: isize = 1;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyEventResult {
    /// User requested exit.
    Exit,
    /// Copy this prompt to the clipboard.
    Copy(PromptKey),
    /// Continue running.
    Continue,
}

/// Handle a key press against the browser state.
pub fn handle_key_event(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &mut BrowserState,
    dataset: &Dataset,
) -> KeyEventResult {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return KeyEventResult::Exit;
    }

    state.status_message = None;

    if state.focus == Focus::Search {
        handle_search_key(code, modifiers, state, dataset);
        return KeyEventResult::Continue;
    }

    match code {
        KeyCode::Char('q') => return KeyEventResult::Exit,
        KeyCode::Char('/') => state.focus = Focus::Search,
        KeyCode::Tab | KeyCode::BackTab => state.focus = state.focus.next(),
        KeyCode::Char('r') => {
            state.reset_if_empty(dataset);
        }
        _ => {
            return match state.focus {
                Focus::Stages => handle_stages_key(code, state, dataset),
                Focus::Prompts => handle_prompts_key(code, state, dataset),
                Focus::Search => KeyEventResult::Continue,
            };
        }
    }

    KeyEventResult::Continue
}

/// Key that resets the filters from the given focus. Plain `r` is text while
/// the search box is focused.
pub fn reset_key(focus: Focus) -> &'static str {
    match focus {
        Focus::Search => "Ctrl+R",
        Focus::Stages | Focus::Prompts => "r",
    }
}

fn handle_search_key(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &mut BrowserState,
    dataset: &Dataset,
) {
    match code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => state.focus = Focus::Prompts,
        KeyCode::Backspace => state.pop_search_char(),
        KeyCode::Char('r') if modifiers == KeyModifiers::CONTROL => {
            state.reset_if_empty(dataset);
        }
        // Only plain or shifted characters are text.
        KeyCode::Char(c) if modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            state.push_search_char(c)
        }
        _ => {}
    }
}

fn handle_stages_key(code: KeyCode, state: &mut BrowserState, dataset: &Dataset) -> KeyEventResult {
    match code {
        KeyCode::Up | KeyCode::Char('k') => state.move_stage_cursor(-1, dataset),
        KeyCode::Down | KeyCode::Char('j') => state.move_stage_cursor(1, dataset),
        KeyCode::Home => state.stage_cursor = 0,
        KeyCode::End => state.stage_cursor = BrowserState::selector_len(dataset) - 1,
        KeyCode::Enter => state.apply_stage_cursor(dataset),
        _ => {}
    }
    KeyEventResult::Continue
}

fn handle_prompts_key(
    code: KeyCode,
    state: &mut BrowserState,
    dataset: &Dataset,
) -> KeyEventResult {
    let view = state.view(dataset);
    let visible = view.prompt_count();

    match code {
        KeyCode::Up | KeyCode::Char('k') => state.move_prompt(-1, visible),
        KeyCode::Down | KeyCode::Char('j') => state.move_prompt(1, visible),
        KeyCode::PageUp => state.move_prompt(-PAGE_STEP, visible),
        KeyCode::PageDown => state.move_prompt(PAGE_STEP, visible),
        KeyCode::Home => state.select_first_prompt(),
        KeyCode::End => state.select_last_prompt(visible),
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => {
            if let Some(key) = state.selected_key(&view) {
                return KeyEventResult::Copy(key);
            }
        }
        _ => {}
    }
    KeyEventResult::Continue
}

/// Mouse wheel moves the prompt selection.
pub fn handle_mouse_event(kind: MouseEventKind, state: &mut BrowserState, dataset: &Dataset) {
    let visible = state.view(dataset).prompt_count();
    match kind {
        MouseEventKind::ScrollUp => state.move_prompt(-WHEEL_STEP, visible),
        MouseEventKind::ScrollDown => state.move_prompt(WHEEL_STEP, visible),
        _ => {}
    }
}
