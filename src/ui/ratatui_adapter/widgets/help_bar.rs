//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "TAB", "F1")
    pub key: String,
    /// Action description (e.g., "toggle", "help")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Default hints for the finder; the toggle hint only applies to multi-select
    #[must_use]
    pub fn default_hints(multi: bool) -> Vec<KeyHint> {
        let mut hints = vec![KeyHint::new("↑↓", "navigate")];
        if multi {
            hints.push(KeyHint::new("TAB", "toggle"));
        }
        hints.extend([
            KeyHint::new("ENTER", "accept"),
            KeyHint::new("ESC", "abort"),
            KeyHint::new("F1", "help"),
        ]);
        hints
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", self.theme.border_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.key_style()));
            spans.push(Span::styled(" = ", self.theme.footer_style()));
            spans.push(Span::styled(hint.action.as_str(), self.theme.footer_style()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hints() {
        let single = HelpBar::default_hints(false);
        assert!(single.iter().all(|h| h.key != "TAB"));
        assert_eq!(single.len(), 4);

        let multi = HelpBar::default_hints(true);
        assert_eq!(multi[1], KeyHint::new("TAB", "toggle"));
        assert_eq!(multi.len(), 5);
    }
}
