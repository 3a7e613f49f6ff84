use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the browser
pub struct Palette;

impl Palette {
    pub const ACCENT: Color = Color::Rgb(99, 102, 241); // indigo
    pub const COPIED: Color = Color::Green;
    pub const ERROR: Color = Color::Red;

    // UI chrome
    pub const HEADER: Color = Color::White;
    pub const TEXT: Color = Color::Gray;
    pub const DIMMED: Color = Color::DarkGray;
    pub const BORDER: Color = Color::Gray;
}

/// Theme provides pre-built styles
pub struct Theme;

impl Theme {
    pub fn header() -> Style {
        Style::default().fg(Palette::HEADER).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Palette::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Palette::DIMMED)
    }

    pub fn accent() -> Style {
        Style::default().fg(Palette::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Palette::ACCENT)
        } else {
            Style::default().fg(Palette::BORDER)
        }
    }

    /// Stage selector entry matching the current filter.
    pub fn selector_active() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_selected() -> Style {
        Style::default()
            .fg(Palette::HEADER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn copied() -> Style {
        Style::default()
            .fg(Palette::COPIED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Palette::ERROR)
    }
}
