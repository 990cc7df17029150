//! Filtering and ranking pipeline

use super::callbacks::Callbacks;
use super::error::{FinderError, Result};
use crate::scoring::ScoringResult;

/// One entry of the filtered view
#[derive(Debug)]
pub struct FilteredEntry<'a, T> {
    /// The item
    pub item: &'a T,
    /// Position of the item in the original list
    pub index: usize,
    /// Display string the item was scored against
    pub display: String,
    /// Score and highlight spans
    pub result: ScoringResult,
}

impl<T> Clone for FilteredEntry<'_, T> {
    fn clone(&self) -> Self {
        Self {
            item: self.item,
            index: self.index,
            display: self.display.clone(),
            result: self.result.clone(),
        }
    }
}

const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{b}', '\u{c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Whether `text` spans more than one line
///
/// A single trailing line terminator still counts as one line.
#[must_use]
pub fn is_multiline(text: &str) -> bool {
    let body = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix(LINE_BREAKS))
        .unwrap_or(text);
    body.contains(LINE_BREAKS)
}

/// Score every item against `query` and keep the positive ones
///
/// The result is sorted by score, highest first; equal scores keep the
/// order of `items`.
///
/// # Errors
///
/// Returns [`FinderError::ContractViolation`] if the display projection
/// yields a multi-line string for any item.
pub fn filter_items<'a, T>(
    items: &'a [T],
    callbacks: &Callbacks<'_, T>,
    query: &str,
) -> Result<Vec<FilteredEntry<'a, T>>> {
    let mut filtered = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let display = callbacks.display(item);
        if is_multiline(&display) {
            return Err(FinderError::ContractViolation(format!(
                "display function must return single-line strings (item {index})"
            )));
        }
        let result = callbacks.score(query, &display);
        if result.is_match() {
            filtered.push(FilteredEntry {
                item,
                index,
                display,
                result,
            });
        }
    }

    // stable: ties keep input order
    filtered.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    Ok(filtered)
}
