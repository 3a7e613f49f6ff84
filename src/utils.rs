use std::io::{self, Write};
use std::sync::Once;

use crossterm::{
    cursor::Show,
    event::DisableMouseCapture,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Restore the terminal after the TUI: raw mode off, main screen back,
/// mouse capture released, cursor visible.
///
/// Best effort; every step ignores its own failure.
pub fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = stdout.flush();
}

/// Pass `result` through, running `undo` first if it is an error.
///
/// Terminal setup steps use this to back out of raw mode when a later step
/// fails before anything owns the terminal.
pub fn undo_on_err<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

/// Install a panic hook that restores terminal state before panicking.
///
/// Safe to call multiple times - only installs once.
pub fn install_terminal_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            cleanup_terminal();
            default_hook(panic_info);
        }));
    });
}

/// Truncate to at most `max_width` terminal columns, ending with `…` when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw + 1 > max_width {
            break;
        }
        result.push(c);
        width += cw;
    }
    result.push('\u{2026}');
    result
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let cw = c.width().unwrap_or(0);
            if current_width + cw > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += cw;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_on_err_runs_only_on_failure() {
        let undone = std::cell::Cell::new(0);

        let ok: Result<u8, &str> = undo_on_err(Ok(1), || undone.set(undone.get() + 1));
        assert_eq!(ok, Ok(1));
        assert_eq!(undone.get(), 0);

        let err: Result<u8, &str> = undo_on_err(Err("no tty"), || undone.set(undone.get() + 1));
        assert_eq!(err, Err("no tty"));
        assert_eq!(undone.get(), 1);
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w\u{2026}");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Hangul syllables are two columns wide.
        let result = truncate("설교 준비", 5);
        assert_eq!(result, "설교\u{2026}");
        assert!(result.width() <= 5);
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("Tell a true story from church history", 12);
        assert_eq!(lines, vec!["Tell a true", "story from", "church", "history"]);
    }

    #[test]
    fn test_wrap_text_short_input_single_line() {
        assert_eq!(wrap_text("Ask a question", 40), vec!["Ask a question"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_splits_long_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_respects_display_width() {
        for line in wrap_text("주제 설교 프롬프트 상자 안내", 6) {
            assert!(line.width() <= 6, "{line:?} too wide");
        }
    }
}
