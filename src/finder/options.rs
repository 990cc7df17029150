//! Finder session options

/// Plain-value settings for one selection session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderOptions {
    /// Allow selecting more than one item
    pub multi: bool,
    /// Initial query
    pub query: String,
    /// Number of items moved by page up/down
    pub page_size: usize,
    /// Share of the screen width used by the preview pane (0-100)
    pub preview_percent: u16,
    /// Auto-accept threshold; 0 disables auto-accept
    pub auto_accept: usize,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            multi: false,
            query: String::new(),
            page_size: 10,
            preview_percent: 40,
            auto_accept: 0,
        }
    }
}

impl FinderOptions {
    /// Enable or disable multi-select
    #[must_use]
    pub const fn with_multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Preseed the query
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the preview width percentage (clamped to 100)
    #[must_use]
    pub fn with_preview_percent(mut self, percent: u16) -> Self {
        self.preview_percent = percent.min(100);
        self
    }

    /// Set the auto-accept threshold
    #[must_use]
    pub const fn with_auto_accept(mut self, threshold: usize) -> Self {
        self.auto_accept = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FinderOptions::default();
        assert!(!options.multi);
        assert!(options.query.is_empty());
        assert_eq!(options.page_size, 10);
        assert_eq!(options.preview_percent, 40);
        assert_eq!(options.auto_accept, 0);
    }

    #[test]
    fn test_builder() {
        let options = FinderOptions::default()
            .with_multi(true)
            .with_query("abc")
            .with_page_size(5)
            .with_preview_percent(250)
            .with_auto_accept(2);
        assert!(options.multi);
        assert_eq!(options.query, "abc");
        assert_eq!(options.page_size, 5);
        assert_eq!(options.preview_percent, 100);
        assert_eq!(options.auto_accept, 2);
    }
}
