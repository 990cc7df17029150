//! Help overlay widget for displaying full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
    /// Page size used by PAGE-UP/PAGE-DOWN
    page_size: usize,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme, page_size: usize) -> Self {
        Self { theme, page_size }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    /// Key bindings grouped by section
    #[must_use]
    pub fn sections(&self) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
        let page = self.page_size;
        vec![
            (
                "Fuzzy Finder Query",
                vec![
                    ("text characters", "Enter a fuzzy finder query.".into()),
                    ("BACKSPACE", "Remove character before the query cursor.".into()),
                    ("DELETE", "Remove character at the query cursor.".into()),
                    ("ARROW-LEFT/RIGHT", "Move the query cursor.".into()),
                    ("CTRL + X", "Clear entire query.".into()),
                ],
            ),
            (
                "List Movement",
                vec![
                    ("ARROW-UP", "Move up 1 entry.".into()),
                    ("ARROW-DOWN", "Move down 1 entry.".into()),
                    ("PAGE-UP", format!("Move up {page} entries.")),
                    ("PAGE-DOWN", format!("Move down {page} entries.")),
                    ("HOME", "Move to first item.".into()),
                    ("END", "Move to last item.".into()),
                ],
            ),
            (
                "Item Selection",
                vec![
                    ("TAB", "Toggle selection of the current item (multi-select).".into()),
                    ("CTRL + A", "Select all items matching the query (multi-select).".into()),
                    ("CTRL + U", "Deselect all items matching the query (multi-select).".into()),
                ],
            ),
            (
                "Control Commands",
                vec![
                    ("ENTER", "Accept the current item(s).".into()),
                    ("ESC", "Abort the fuzzy finder.".into()),
                    ("CTRL + P", "Toggle the preview window.".into()),
                    ("F1", "Toggle this help screen.".into()),
                ],
            ),
        ]
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];

        for (title, binds) in self.sections() {
            lines.push(Line::styled(
                format!("  {title}"),
                self.theme.title_style().add_modifier(Modifier::UNDERLINED),
            ));
            lines.push(Line::default());
            for (key, desc) in binds {
                lines.push(self.help_line(key, desc));
            }
            lines.push(Line::default());
        }

        lines.push(Line::styled("  F1 = close help", self.theme.footer_style()));
        lines
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("    {key:<18}"), self.theme.key_style()),
            Span::styled(desc, self.theme.text_style()),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(80, 90, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(" HELP ", self.theme.title_style()))
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
