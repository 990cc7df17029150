//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Prompt shown before the query
pub const PROMPT: &str = "> ";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query, in characters
    cursor: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
        }
    }
}

/// Split `text` before the character at `index`
fn split_at_char(text: &str, index: usize) -> (&str, &str) {
    let byte = text
        .char_indices()
        .nth(index)
        .map_or(text.len(), |(byte, _)| byte);
    text.split_at(byte)
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(" QUERY ", self.theme.title_style()));

        let inner = block.inner(area);
        block.render(area, buf);

        let (before, after) = split_at_char(self.query, self.cursor);
        let spans = vec![
            Span::styled(PROMPT, self.theme.query_style()),
            Span::styled(before, self.theme.query_style()),
            Span::styled("│", self.theme.query_cursor_style()),
            Span::styled(after, self.theme.query_style()),
        ];

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
