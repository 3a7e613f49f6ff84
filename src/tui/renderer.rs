//! Rendering functions for TUI components.

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::event_handler::reset_key;
use super::state::{BrowserState, Focus};
use super::theme::Theme;
use crate::dataset::Dataset;
use crate::utils::{truncate, wrap_text};
use crate::view::{CopyAcks, DerivedView, ViewState};

/// Fixed width of the stage selector column.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Width of the search box in the header.
pub const SEARCH_WIDTH: u16 = 44;

/// Columns before prompt text: selection marker plus right-aligned id.
const CARD_GUTTER: usize = 6;

/// Draw the whole browser for the current state.
pub fn draw(frame: &mut Frame, dataset: &Dataset, state: &mut BrowserState, now: Instant) {
    let view = state.view(dataset);
    state.clamp_selection(view.prompt_count());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SEARCH_WIDTH)])
        .split(rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(rows[1]);

    render_title(frame, header[0], dataset);
    render_search_box(frame, header[1], &state.view_state, state.focus == Focus::Search);
    render_stage_selector(frame, body[0], dataset, state);
    render_content(frame, body[1], &view, state, now);
    render_footer(frame, rows[2], state, view.is_empty());
}

/// Render the title and tagline.
pub fn render_title(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", crate::LOGO), Theme::accent()),
            Span::styled("Topical Sermon Prompt Box", Theme::header()),
        ]),
        Line::from(Span::styled(
            format!(
                "{} stages, {} prompts for preparing a sermon with AI",
                dataset.stages().len(),
                dataset.total_prompts()
            ),
            Theme::dimmed(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the search input.
pub fn render_search_box(frame: &mut Frame, area: Rect, view_state: &ViewState, focused: bool) {
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Theme::border(focused));

    let line = if view_state.search_term.is_empty() && !focused {
        Line::from(Span::styled("Press / to search prompts", Theme::dimmed()))
    } else {
        let mut spans = vec![Span::styled(view_state.search_term.clone(), Theme::header())];
        if focused {
            spans.push(Span::styled("\u{258F}", Theme::accent()));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the stage selector: "all prompts" followed by one entry per stage.
pub fn render_stage_selector(
    frame: &mut Frame,
    area: Rect,
    dataset: &Dataset,
    state: &BrowserState,
) {
    let focused = state.focus == Focus::Stages;
    let block = Block::default()
        .title(" Stages ")
        .borders(Borders::ALL)
        .border_style(Theme::border(focused));

    let label_width = usize::from(area.width.saturating_sub(4));
    let entry_style = |active: bool| {
        if active {
            Theme::selector_active()
        } else {
            Theme::text()
        }
    };

    let mut items = vec![ListItem::new(Line::from(Span::styled(
        truncate(&format!("All prompts ({})", dataset.total_prompts()), label_width),
        entry_style(state.view_state.is_all_highlighted()),
    )))];

    for stage in dataset.stages() {
        let mut lines = vec![Line::from(Span::styled(
            truncate(stage.short_title(), label_width),
            entry_style(state.view_state.is_stage_highlighted(stage.id)),
        ))];
        if let Some(subtitle) = stage.subtitle() {
            lines.push(Line::from(Span::styled(
                truncate(subtitle, label_width),
                Theme::dimmed(),
            )));
        }
        items.push(ListItem::new(lines));
    }

    let list = List::new(items)
        .block(block)
        .highlight_symbol("\u{25B8} ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.stage_cursor));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Content lines plus the line range occupied by the selected card.
pub struct ContentLines {
    pub lines: Vec<Line<'static>>,
    pub selected_span: Option<(u16, u16)>,
}

/// Lay out every stage and prompt card of `view` at `width` columns.
pub fn build_content_lines(
    view: &DerivedView<'_>,
    width: u16,
    selected: Option<usize>,
    acks: &CopyAcks,
    now: Instant,
) -> ContentLines {
    let width = usize::from(width);
    let text_width = width.saturating_sub(CARD_GUTTER).max(1);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut selected_span = None;
    let mut index = 0;

    for (i, stage_view) in view.stages().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let stage = stage_view.stage;
        lines.push(Line::from(Span::styled(
            truncate(&stage.title, width),
            Theme::header(),
        )));
        for desc in wrap_text(&stage.description, width.max(1)) {
            lines.push(Line::from(Span::styled(desc, Theme::dimmed())));
        }
        lines.push(Line::default());

        for prompt in &stage_view.prompts {
            let is_selected = selected == Some(index);
            let start = lines.len();
            let marker = if is_selected { "\u{258C} " } else { "  " };
            let text_style = if is_selected {
                Theme::card_selected()
            } else {
                Theme::text()
            };

            for (row, chunk) in wrap_text(&prompt.text, text_width).into_iter().enumerate() {
                let gutter = if row == 0 {
                    format!("{marker}{:>3} ", prompt.id)
                } else {
                    format!("{marker}    ")
                };
                lines.push(Line::from(vec![
                    Span::styled(gutter, Theme::accent()),
                    Span::styled(chunk, text_style),
                ]));
            }

            if acks.is_visible(stage.key_for(prompt), now) {
                lines.push(Line::from(vec![
                    Span::styled(format!("{marker}    "), Theme::accent()),
                    Span::styled("\u{2713} Copied!", Theme::copied()),
                ]));
            }

            if is_selected {
                selected_span = Some((to_u16(start), to_u16(lines.len())));
            }
            index += 1;
        }
    }

    ContentLines {
        lines,
        selected_span,
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Render the filtered stages and prompt cards, or the empty state.
pub fn render_content(
    frame: &mut Frame,
    area: Rect,
    view: &DerivedView<'_>,
    state: &mut BrowserState,
    now: Instant,
) {
    let focused = state.focus == Focus::Prompts;
    let block = Block::default()
        .title(format!(" Prompts ({}) ", view.prompt_count()))
        .title_style(Theme::header())
        .borders(Borders::ALL)
        .border_style(Theme::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.is_empty() {
        render_empty(frame, inner, state.focus);
        return;
    }

    let content = build_content_lines(
        view,
        inner.width,
        Some(state.selected_prompt),
        &state.acks,
        now,
    );

    state.scroll.viewport_height = inner.height;
    if let Some((start, end)) = content.selected_span {
        state.scroll.ensure_visible(start, end);
    }

    let paragraph = Paragraph::new(content.lines).scroll((state.scroll.offset, 0));
    frame.render_widget(paragraph, inner);
}

/// "No results" with the reset hint.
pub fn render_empty(frame: &mut Frame, area: Rect, focus: Focus) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("No results", Theme::header())),
        Line::from(Span::styled("Try a different search term.", Theme::dimmed())),
        Line::default(),
        Line::from(vec![
            Span::styled(reset_key(focus), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" reset filters", Theme::accent()),
        ]),
    ];
    let paragraph = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, area);
}

const SEARCH_HINTS: &[(&str, &str)] = &[
    ("type", "search"),
    ("Enter/Esc", "done"),
    ("Backspace", "delete"),
];

const STAGES_HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "move"),
    ("Enter", "select"),
    ("Tab", "prompts"),
    ("/", "search"),
    ("q", "quit"),
];

const PROMPTS_HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "move"),
    ("Enter/c", "copy"),
    ("Tab", "stages"),
    ("/", "search"),
    ("q", "quit"),
];

/// Render footer with keybinds, or the pending status message.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &BrowserState, view_empty: bool) {
    if let Some(ref message) = state.status_message {
        let line = Line::from(Span::styled(message.as_str(), Theme::error()));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints = match state.focus {
        Focus::Search => SEARCH_HINTS,
        Focus::Stages => STAGES_HINTS,
        Focus::Prompts => PROMPTS_HINTS,
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" \u{2502} "));
        }
        spans.push(Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::raw(format!(" {action}")));
    }
    if view_empty {
        spans.push(Span::raw(" \u{2502} "));
        spans.push(Span::styled(
            reset_key(state.focus),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" reset"));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PromptKey, Stage};
    use ratatui::{backend::TestBackend, Terminal};

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Stage::new(1, "Stage 1: Intro", "Opening moves")
                .with_prompt(1, "Tell a story")
                .with_prompt(2, "Ask a question"),
            Stage::new(2, "Stage 2: Close", "Landing").with_prompt(3, "Call to action"),
        ])
        .unwrap()
    }

    fn render_to_string(dataset: &Dataset, state: &mut BrowserState, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| draw(frame, dataset, state, now))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_draw_shows_all_stages_and_prompts() {
        let dataset = dataset();
        let mut state = BrowserState::new(ViewState::default(), &dataset);
        let screen = render_to_string(&dataset, &mut state, Instant::now());

        assert!(screen.contains("Topical Sermon Prompt Box"));
        assert!(screen.contains("All prompts (3)"));
        assert!(screen.contains("Stage 1: Intro"));
        assert!(screen.contains("Tell a story"));
        assert!(screen.contains("Call to action"));
        assert!(screen.contains("Prompts (3)"));
        assert!(!screen.contains("No results"));
    }

    #[test]
    fn test_draw_empty_view_offers_reset() {
        let dataset = dataset();
        let mut state = BrowserState::new(
            ViewState {
                search_term: "xyz".to_string(),
                active_stage_id: None,
            },
            &dataset,
        );
        let screen = render_to_string(&dataset, &mut state, Instant::now());

        assert!(screen.contains("No results"));
        assert!(screen.contains("r reset filters"));
        assert!(!screen.contains("Ctrl+R"));
        assert!(screen.contains("xyz"));
    }

    #[test]
    fn test_draw_empty_view_in_search_shows_ctrl_r() {
        let dataset = dataset();
        let mut state = BrowserState::new(
            ViewState {
                search_term: "xyz".to_string(),
                active_stage_id: None,
            },
            &dataset,
        );
        state.focus = Focus::Search;
        let screen = render_to_string(&dataset, &mut state, Instant::now());

        assert!(screen.contains("Ctrl+R reset filters"));
    }

    #[test]
    fn test_copied_ack_rendered_until_expiry() {
        let dataset = dataset();
        let mut state = BrowserState::new(ViewState::default(), &dataset);
        let now = Instant::now();
        state.record_copy(PromptKey::new(1, 2), now);

        let screen = render_to_string(&dataset, &mut state, now);
        assert!(screen.contains("Copied!"));

        let later = now + crate::view::COPIED_DURATION;
        let screen = render_to_string(&dataset, &mut state, later);
        assert!(!screen.contains("Copied!"));
    }

    #[test]
    fn test_build_content_lines_tracks_selected_card() {
        let dataset = dataset();
        let view = crate::view::compute_view(&dataset, &ViewState::default());
        let acks = CopyAcks::default();
        let content = build_content_lines(&view, 60, Some(2), &acks, Instant::now());

        // title, description, blank, two cards, blank, title, description, blank, card
        assert_eq!(content.lines.len(), 10);
        assert_eq!(content.selected_span, Some((9, 10)));
    }

    #[test]
    fn test_build_content_lines_wraps_long_prompts() {
        let dataset = Dataset::new(vec![Stage::new(1, "S", "d").with_prompt(
            1,
            "one two three four five six seven eight nine ten",
        )])
        .unwrap();
        let view = crate::view::compute_view(&dataset, &ViewState::default());
        let content =
            build_content_lines(&view, 20, Some(0), &CopyAcks::default(), Instant::now());

        let (start, end) = content.selected_span.unwrap();
        assert!(end - start > 1, "long prompt should span several lines");
    }
}
