//! View state for the ratatui TUI
//!
//! Everything the terminal front end remembers between frames that is not
//! engine state: the list viewport and the cached preview.

use crate::finder::Engine;
use crate::ui::preview::{PreviewProvider, PreviewText};

/// Preview text computed for one entry of one filtered view
#[derive(Debug, Clone)]
struct CachedPreview {
    /// Original index of the item the preview belongs to
    index: usize,
    /// Engine revision the entry was taken from
    revision: u64,
    text: PreviewText,
}

/// Viewport and preview cache
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Index of the first filtered entry shown in the list
    pub scroll_offset: usize,
    /// Height of the visible item list area (set during render)
    pub visible_height: usize,
    preview: Option<CachedPreview>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Create a view state with the viewport at the top
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scroll_offset: 0,
            visible_height: 20, // Default, updated during render
            preview: None,
        }
    }

    /// Adjust scroll offset to keep the cursor visible
    pub fn scroll_to(&mut self, cursor: usize, len: usize) {
        if self.visible_height == 0 {
            self.scroll_offset = cursor;
            return;
        }
        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = cursor + 1 - self.visible_height;
        }
        // no empty rows below the last entry while scrolled
        self.scroll_offset = self.scroll_offset.min(len.saturating_sub(self.visible_height));
    }

    /// The cached preview, if any
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewText> {
        self.preview.as_ref().map(|cached| &cached.text)
    }

    /// Make sure the cached preview belongs to the entry under the cursor
    ///
    /// The provider is only called when the highlighted item changed or the
    /// engine refiltered (new query or new items). Failures are logged and
    /// shown as the preview text.
    pub fn refresh_preview<T>(
        &mut self,
        engine: &Engine<'_, T>,
        provider: &dyn PreviewProvider<T>,
    ) {
        let Some(entry) = engine.current() else {
            self.preview = None;
            return;
        };
        let revision = engine.revision();
        if self
            .preview
            .as_ref()
            .is_some_and(|cached| cached.index == entry.index && cached.revision == revision)
        {
            return;
        }

        let text = provider
            .preview(entry.item, &entry.display, &entry.result)
            .unwrap_or_else(|e| {
                tracing::warn!(item = %entry.display, error = %e, "preview failed");
                PreviewText::plain(format!("Preview error: {e}"))
            });
        self.preview = Some(CachedPreview {
            index: entry.index,
            revision,
            text,
        });
    }
}
