//! Item list widget for displaying filtered items

use crate::finder::Engine;
use crate::scoring::ScoringResult;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Marker shown before selected items
pub const SELECTED_MARKER: &str = "✓ ";
/// Placeholder for unselected items
pub const UNSELECTED_MARKER: &str = "  ";

/// Split `text` into spans, styling characters highlighted by `result`
///
/// Match offsets are character offsets; matches past the end are ignored.
#[must_use]
pub fn highlight_spans<'t>(
    text: &'t str,
    result: &ScoringResult,
    base: Style,
    highlight: Style,
) -> Vec<Span<'t>> {
    let mut spans = Vec::new();
    let mut run_start = 0;
    let mut run_highlighted = false;

    for (position, (byte, _)) in text.char_indices().enumerate() {
        let highlighted = result.is_highlighted(position);
        if highlighted != run_highlighted {
            if byte > run_start {
                let style = if run_highlighted { highlight } else { base };
                spans.push(Span::styled(&text[run_start..byte], style));
            }
            run_start = byte;
            run_highlighted = highlighted;
        }
    }
    if run_start < text.len() {
        let style = if run_highlighted { highlight } else { base };
        spans.push(Span::styled(&text[run_start..], style));
    }

    spans
}

/// Item list widget that displays filtered items with selection markers
pub struct ItemList<'v, 'a, T> {
    /// Engine state to render
    engine: &'v Engine<'a, T>,
    /// Theme for styling
    theme: &'v Theme,
    /// First visible entry
    offset: usize,
}

impl<'v, 'a, T: PartialEq> ItemList<'v, 'a, T> {
    /// Create a new item list widget
    #[must_use]
    pub const fn new(engine: &'v Engine<'a, T>, theme: &'v Theme) -> Self {
        Self {
            engine,
            theme,
            offset: 0,
        }
    }

    /// Set the first visible entry
    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Title with selection and match counts
    fn title(&self) -> String {
        format!(
            " ITEMS ({} selected | {} matches) ",
            self.engine.selection().len(),
            self.engine.filtered().len()
        )
    }

    /// Render a single row
    fn render_row(&self, visible_idx: usize) -> Option<ListItem<'v>> {
        let entry = self.engine.filtered().get(visible_idx)?;
        let is_cursor = visible_idx == self.engine.item_cursor();
        let is_selected = self.engine.is_selected(entry.item);

        let base = match (is_cursor, is_selected) {
            (true, true) => self.theme.cursor_selected_style(),
            (true, false) => self.theme.cursor_style(),
            (false, true) => self.theme.selected_style(),
            (false, false) => self.theme.text_style(),
        };
        let marker = if is_selected {
            SELECTED_MARKER
        } else {
            UNSELECTED_MARKER
        };

        let mut spans = vec![Span::styled(marker, base)];
        spans.extend(highlight_spans(
            &entry.display,
            &entry.result,
            base,
            self.theme.highlight_style(),
        ));

        let item = ListItem::new(Line::from(spans));
        Some(if is_cursor { item.style(base) } else { item })
    }
}

impl<T: PartialEq> Widget for ItemList<'_, '_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(self.title(), self.theme.title_style()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.engine.filtered().is_empty() {
            Paragraph::new(Line::styled("No matching items!", self.theme.no_match_style()))
                .render(inner, buf);
            return;
        }

        let visible_height = inner.height as usize;
        let start = self.offset;
        let end = (start + visible_height).min(self.engine.filtered().len());

        let items: Vec<ListItem> = (start..end)
            .filter_map(|visible_idx| self.render_row(visible_idx))
            .collect();

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::{Callbacks, Command, FinderOptions};
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    fn matches(spans: &[(usize, usize)]) -> ScoringResult {
        let mut result = ScoringResult::new();
        for &(start, len) in spans {
            result.add_match(start, len, 1);
        }
        result
    }

    fn contents(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_highlight_spans() {
        let base = Style::default();
        let hl = Style::default().fg(Color::Cyan);
        let spans = highlight_spans("brown fox", &matches(&[(6, 3), (0, 3)]), base, hl);
        let parts: Vec<(&str, bool)> = spans
            .iter()
            .map(|s| (s.content.as_ref(), s.style == hl))
            .collect();
        assert_eq!(parts, vec![("bro", true), ("wn ", false), ("fox", true)]);
    }

    #[test]
    fn test_highlight_spans_unicode_and_overflow() {
        let base = Style::default();
        let hl = Style::default().fg(Color::Cyan);
        let spans = highlight_spans("größe", &matches(&[(2, 2), (40, 2)]), base, hl);
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["gr", "öß", "e"]);
        assert!(highlight_spans("", &ScoringResult::new(), base, hl).is_empty());
    }

    #[test]
    fn test_render_rows_and_title() {
        let items = ["apple", "banana", "cherry"];
        let options = FinderOptions::default().with_multi(true);
        let mut engine = Engine::new(&items, Callbacks::default(), options).unwrap();
        engine.apply(Command::MoveItemCursorBy(1)).unwrap();
        engine.apply(Command::ToggleSelection).unwrap();

        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(50, 6)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(ItemList::new(&engine, &theme), frame.area()))
            .unwrap();

        let text = contents(&terminal);
        assert!(text.contains("ITEMS (1 selected | 3 matches)"), "{text}");
        assert!(text.contains("  apple"));
        assert!(text.contains("✓ banana"));
        assert!(text.contains("  cherry"));
    }

    #[test]
    fn test_render_no_matches() {
        let items = ["apple"];
        let options = FinderOptions::default().with_query("zzz");
        let engine = Engine::new(&items, Callbacks::default(), options).unwrap();

        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(ItemList::new(&engine, &theme), frame.area()))
            .unwrap();

        assert!(contents(&terminal).contains("No matching items!"));
    }

    #[test]
    fn test_render_respects_offset() {
        let items: Vec<String> = (0..20).map(|i| format!("item{i:02}")).collect();
        let engine = Engine::new(&items, Callbacks::default(), FinderOptions::default()).unwrap();

        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(ItemList::new(&engine, &theme).offset(10), frame.area());
            })
            .unwrap();

        let text = contents(&terminal);
        assert!(text.contains("item10"));
        assert!(text.contains("item12"));
        assert!(!text.contains("item09"));
        assert!(!text.contains("item13"));
    }
}
