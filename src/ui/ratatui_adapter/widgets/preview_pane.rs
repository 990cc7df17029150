//! Preview pane widget for displaying item previews

use crate::ui::preview::PreviewText;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Preview pane widget that displays the preview of the highlighted item
pub struct PreviewPane<'a> {
    /// Preview content, if an item is highlighted
    content: Option<&'a PreviewText>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> PreviewPane<'a> {
    /// Create a new preview pane widget
    #[must_use]
    pub const fn new(content: Option<&'a PreviewText>, theme: &'a Theme) -> Self {
        Self { content, theme }
    }
}

impl Widget for PreviewPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(" PREVIEW ", self.theme.title_style()));

        // lines are clipped, not wrapped
        let lines: Vec<Line> = self.content.map_or_else(Vec::new, |preview| {
            preview
                .lines()
                .map(|line| Line::styled(line, self.theme.text_style()))
                .collect()
        });

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_render_preview_lines() {
        let theme = Theme::default();
        let preview = PreviewText::plain("first line\nsecond line\nthird line");
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(PreviewPane::new(Some(&preview), &theme), frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| (0..20u16).map(|x| buffer[(x, y)].symbol()).collect::<String>();
        assert!(row(0).contains("PREVIEW"));
        assert!(row(1).contains("first line"));
        assert!(row(2).contains("second line"));
        // only two inner rows
        assert!(!row(3).contains("third"));
    }
}
