//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the finder.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Color for item text
    pub text: Color,
    /// Color for window titles
    pub title: Color,
    /// Color for the "No matching items!" notice
    pub no_match: Color,
    /// Color for the query line
    pub query: Color,
    /// Color for the footer key hints
    pub footer: Color,
    /// Color for selected (marked) items
    pub selected: Color,
    /// Foreground of the row under the cursor
    pub cursor_fg: Color,
    /// Background of the row under the cursor
    pub cursor_bg: Color,
    /// Foreground of matched characters
    pub highlight_fg: Color,
    /// Background of matched characters
    pub highlight_bg: Color,
    /// Color for borders
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            text: Color::White,
            title: Color::Yellow,
            no_match: Color::Red,
            query: Color::Yellow,
            footer: Color::Yellow,
            selected: Color::Green,
            cursor_fg: Color::Black,
            cursor_bg: Color::White,
            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
            border: Color::DarkGray,
        }
    }

    /// Style for unselected items
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for window titles
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Style for the empty-result notice
    #[must_use]
    pub fn no_match_style(&self) -> Style {
        Style::default().fg(self.no_match)
    }

    /// Style for the query text and prompt
    #[must_use]
    pub fn query_style(&self) -> Style {
        Style::default().fg(self.query)
    }

    /// Style for footer hints
    #[must_use]
    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer)
    }

    /// Style for key names in hints and help
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.footer).add_modifier(Modifier::BOLD)
    }

    /// Style for items marked as selected
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default().fg(self.selected)
    }

    /// Style for the row under the cursor
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor_fg).bg(self.cursor_bg)
    }

    /// Style for the row under the cursor when it is also selected
    #[must_use]
    pub fn cursor_selected_style(&self) -> Style {
        Style::default()
            .fg(self.cursor_fg)
            .bg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for matched characters
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the query cursor
    #[must_use]
    pub fn query_cursor_style(&self) -> Style {
        Style::default()
            .fg(self.query)
            .add_modifier(Modifier::SLOW_BLINK | Modifier::BOLD)
    }
}
