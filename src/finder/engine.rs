//! Selection engine
//!
//! Holds the query, both cursors, the filtered view and the multi-select
//! set, and applies [`Command`]s to them. Every query or item-set change
//! refilters immediately, so [`Engine::filtered`] always reflects
//! [`Engine::query`].

use super::callbacks::Callbacks;
use super::command::Command;
use super::cursor::BoundedCursor;
use super::error::{FinderError, Result};
use super::filter::{FilteredEntry, filter_items};
use super::options::FinderOptions;
use std::fmt;

/// How a session ended
pub enum Outcome<'a, T> {
    /// The user accepted; holds the returned items (possibly empty)
    Accepted(Vec<&'a T>),
    /// The user cancelled; no result was computed
    Aborted,
}

impl<'a, T> Outcome<'a, T> {
    /// Whether the session was aborted
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    /// The accepted items, or `None` if aborted
    #[must_use]
    pub fn accepted(&self) -> Option<&[&'a T]> {
        match self {
            Self::Accepted(items) => Some(items),
            Self::Aborted => None,
        }
    }

    /// Consume the outcome, returning the accepted items
    #[must_use]
    pub fn into_accepted(self) -> Option<Vec<&'a T>> {
        match self {
            Self::Accepted(items) => Some(items),
            Self::Aborted => None,
        }
    }
}

impl<T> Clone for Outcome<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Accepted(items) => Self::Accepted(items.clone()),
            Self::Aborted => Self::Aborted,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted(items) => f.debug_tuple("Accepted").field(items).finish(),
            Self::Aborted => f.write_str("Aborted"),
        }
    }
}

impl<T: PartialEq> PartialEq for Outcome<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Accepted(a), Self::Accepted(b)) => a == b,
            (Self::Aborted, Self::Aborted) => true,
            _ => false,
        }
    }
}

/// Result of applying one command
#[derive(Debug, Clone, PartialEq)]
pub enum Step<'a, T> {
    /// Keep reading commands
    Continue,
    /// The session is over
    Done(Outcome<'a, T>),
}

fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// The selection state machine
pub struct Engine<'a, T> {
    items: &'a [T],
    callbacks: Callbacks<'a, T>,
    options: FinderOptions,
    query: String,
    query_cursor: BoundedCursor,
    item_cursor: BoundedCursor,
    filtered: Vec<FilteredEntry<'a, T>>,
    selection: Vec<&'a T>,
    show_preview: bool,
    show_help: bool,
    started: bool,
    outcome: Option<Outcome<'a, T>>,
    revision: u64,
}

impl<'a, T: PartialEq> Engine<'a, T> {
    /// Create an engine over `items` and compute the initial filtered view
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::ContractViolation`] if `display` yields a
    /// multi-line string for any item.
    pub fn new(items: &'a [T], callbacks: Callbacks<'a, T>, options: FinderOptions) -> Result<Self> {
        let query = options.query.clone();
        let filtered = filter_items(items, &callbacks, &query)?;
        tracing::debug!(
            items = items.len(),
            matches = filtered.len(),
            multi = options.multi,
            "finder engine created"
        );

        Ok(Self {
            items,
            callbacks,
            query_cursor: BoundedCursor::at(query.chars().count()),
            item_cursor: BoundedCursor::default(),
            query,
            options,
            filtered,
            selection: Vec::new(),
            show_preview: true,
            show_help: false,
            started: false,
            outcome: None,
            revision: 0,
        })
    }

    /// Run the one-time session start logic
    ///
    /// If auto-accept fires (a positive threshold is configured and the
    /// initial view holds exactly that many entries in multi-select mode, or
    /// exactly one in single-select mode) the session ends immediately and
    /// the outcome is returned. Otherwise, in multi-select mode, the
    /// preselection predicate marks the initial selection. Only the first
    /// call does anything; later calls report the outcome, if any.
    pub fn start(&mut self) -> Option<Outcome<'a, T>> {
        if self.started || self.outcome.is_some() {
            return self.outcome.clone();
        }
        self.started = true;

        if self.options.auto_accept > 0 {
            let matches = self.filtered.len();
            let fires = if self.options.multi {
                matches == self.options.auto_accept
            } else {
                matches == 1
            };
            if fires {
                let items: Vec<&'a T> = self.filtered.iter().map(|entry| entry.item).collect();
                tracing::debug!(matches, "auto-accepting initial view");
                let outcome = Outcome::Accepted(items);
                self.outcome = Some(outcome.clone());
                return Some(outcome);
            }
        }

        if self.options.multi {
            for entry in &self.filtered {
                if self.callbacks.preselect(entry.item, &entry.result)
                    && !self.selection.contains(&entry.item)
                {
                    self.selection.push(entry.item);
                }
            }
            tracing::debug!(preselected = self.selection.len(), "preselection applied");
        }

        None
    }

    /// Apply one command
    ///
    /// Once the session has ended, commands are ignored and the final
    /// outcome is reported again.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::IndexOutOfBounds`] for query edits with
    /// invalid indices and [`FinderError::ContractViolation`] if refiltering
    /// hits a multi-line display string.
    pub fn apply(&mut self, command: Command) -> Result<Step<'a, T>> {
        if let Some(outcome) = &self.outcome {
            return Ok(Step::Done(outcome.clone()));
        }

        match command {
            Command::MoveItemCursorTo(index) => self.move_item_cursor_to(index),
            Command::MoveItemCursorBy(offset) => self.move_item_cursor_by(offset),
            Command::ItemCursorLast => {
                self.move_item_cursor_to(signed(self.filtered.len()) - 1);
            }
            Command::PageUp => self.move_item_cursor_by(-signed(self.options.page_size)),
            Command::PageDown => self.move_item_cursor_by(signed(self.options.page_size)),
            Command::MoveQueryCursorTo(index) => self.move_query_cursor_to(index),
            Command::MoveQueryCursorBy(offset) => self.move_query_cursor_by(offset),
            Command::InsertQuery { text, index } => self.insert_query(&text, index)?,
            Command::InsertAtCursor(text) => self.insert_at_cursor(&text)?,
            Command::RemoveQuery { index, length } => self.remove_query(index, length)?,
            Command::Backspace => self.remove_at_cursor(true)?,
            Command::Delete => self.remove_at_cursor(false)?,
            Command::ResetQuery => self.reset_query()?,
            Command::SetQuery(query) => self.set_query(query)?,
            Command::ToggleSelection => self.toggle_selection(),
            Command::SelectAll => self.select_all(),
            Command::DeselectAll => self.deselect_all(),
            Command::TogglePreview => self.toggle_preview(),
            Command::ToggleHelp => self.toggle_help(),
            Command::Accept => return Ok(Step::Done(self.accept())),
            Command::Abort => return Ok(Step::Done(self.abort())),
        }

        Ok(Step::Continue)
    }

    // ------------------------------------------------------------------
    // Cursor movement
    // ------------------------------------------------------------------

    /// Move the item cursor to `index`, clamped to the filtered view
    pub fn move_item_cursor_to(&mut self, index: isize) {
        let max = self.filtered.len().saturating_sub(1);
        self.item_cursor.move_to(index, max);
    }

    /// Move the item cursor by `offset`, clamped to the filtered view
    pub fn move_item_cursor_by(&mut self, offset: isize) {
        let max = self.filtered.len().saturating_sub(1);
        self.item_cursor.move_by(offset, max);
    }

    /// Move the query cursor to `index`, clamped to `[0, query length]`
    pub fn move_query_cursor_to(&mut self, index: isize) {
        let max = self.query_len();
        self.query_cursor.move_to(index, max);
    }

    /// Move the query cursor by `offset`, clamped to `[0, query length]`
    pub fn move_query_cursor_by(&mut self, offset: isize) {
        let max = self.query_len();
        self.query_cursor.move_by(offset, max);
    }

    // ------------------------------------------------------------------
    // Query editing
    // ------------------------------------------------------------------

    /// Insert `text` into the query before character `index`
    ///
    /// A negative index counts from the end, `-1` meaning "append". The
    /// query cursor advances when it sits at or after the insertion point;
    /// inserting a non-empty text resets the item cursor.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::IndexOutOfBounds`] if the resolved index is
    /// outside `[0, query length]`.
    pub fn insert_query(&mut self, text: &str, index: isize) -> Result<()> {
        let len = signed(self.query_len());
        let resolved = if index < 0 { len + index + 1 } else { index };
        if !(0..=len).contains(&resolved) {
            return Err(FinderError::IndexOutOfBounds(format!(
                "index {index} to add to query is out of bounds (query length {len})"
            )));
        }
        if text.is_empty() {
            return Ok(());
        }
        let at = resolved.unsigned_abs();

        let mut query = self.query.clone();
        query.insert_str(self.byte_offset(at), text);
        self.refilter_to(self.items, query)?;

        let cursor = self.query_cursor.get();
        if cursor >= at {
            self.query_cursor.set(cursor + text.chars().count());
        }
        Ok(())
    }

    /// Insert `text` at the query cursor
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Engine::insert_query`].
    pub fn insert_at_cursor(&mut self, text: &str) -> Result<()> {
        self.insert_query(text, signed(self.query_cursor.get()))
    }

    /// Remove `length` characters of the query starting at `index`
    ///
    /// A negative index counts from the end (`-1` is the last character).
    /// The length may run past the end of the query. The query cursor stays
    /// put when it is at or before `index`, moves to `index` when it falls in
    /// the removed range and shifts left by `length` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::IndexOutOfBounds`] if the resolved index is
    /// outside `[0, query length)` or `length` is negative.
    pub fn remove_query(&mut self, index: isize, length: isize) -> Result<()> {
        let len = signed(self.query_len());
        let resolved = if index < 0 { len + index } else { index };
        if !(0..len).contains(&resolved) {
            return Err(FinderError::IndexOutOfBounds(format!(
                "index {index} to remove from query is out of bounds (query length {len})"
            )));
        }
        if length < 0 {
            return Err(FinderError::IndexOutOfBounds(format!(
                "length {length} to remove from query must not be negative"
            )));
        }
        if length == 0 {
            return Ok(());
        }

        let end = resolved.saturating_add(length).min(len);
        let start_byte = self.byte_offset(resolved.unsigned_abs());
        let end_byte = self.byte_offset(end.unsigned_abs());
        let mut query = self.query.clone();
        query.replace_range(start_byte..end_byte, "");
        self.refilter_to(self.items, query)?;

        let cursor = signed(self.query_cursor.get());
        if cursor > resolved {
            if cursor <= resolved.saturating_add(length) {
                self.query_cursor.set(resolved.unsigned_abs());
            } else {
                self.query_cursor.set((cursor - length).unsigned_abs());
            }
        }
        Ok(())
    }

    /// Remove one character next to the query cursor
    ///
    /// With `before` this behaves like backspace, otherwise like delete.
    /// Nothing happens when there is no character on that side.
    ///
    /// # Errors
    ///
    /// Propagates refiltering errors.
    pub fn remove_at_cursor(&mut self, before: bool) -> Result<()> {
        let cursor = self.query_cursor.get();
        if before {
            if cursor == 0 {
                return Ok(());
            }
            self.remove_query(signed(cursor) - 1, 1)
        } else {
            if cursor >= self.query_len() {
                return Ok(());
            }
            self.remove_query(signed(cursor), 1)
        }
    }

    /// Clear the query and reset both cursors
    ///
    /// Does nothing at all if the query is already empty.
    ///
    /// # Errors
    ///
    /// Propagates refiltering errors.
    pub fn reset_query(&mut self) -> Result<()> {
        if self.query.is_empty() {
            return Ok(());
        }
        self.refilter_to(self.items, String::new())?;
        self.query_cursor.reset();
        Ok(())
    }

    /// Replace the whole query
    ///
    /// Moves the query cursor to the end and resets the item cursor, unless
    /// the new value equals the current one, in which case nothing changes.
    ///
    /// # Errors
    ///
    /// Propagates refiltering errors.
    pub fn set_query(&mut self, query: impl Into<String>) -> Result<()> {
        let query = query.into();
        if query == self.query {
            return Ok(());
        }
        self.refilter_to(self.items, query)?;
        self.query_cursor.set(self.query_len());
        Ok(())
    }

    /// Replace the item list and refilter
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::ContractViolation`] on multi-line display strings.
    pub fn set_items(&mut self, items: &'a [T]) -> Result<()> {
        self.refilter_to(items, self.query.clone())
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Toggle the item under the cursor in or out of the selection
    ///
    /// Only has an effect in multi-select mode with a non-empty view.
    pub fn toggle_selection(&mut self) {
        if !self.options.multi {
            return;
        }
        let Some(item) = self.current().map(|entry| entry.item) else {
            return;
        };
        if let Some(pos) = self.selection.iter().position(|selected| *selected == item) {
            self.selection.remove(pos);
        } else {
            self.selection.push(item);
        }
        tracing::debug!(selected = self.selection.len(), "selection toggled");
    }

    /// Append every filtered item that is not selected yet
    pub fn select_all(&mut self) {
        if !self.options.multi {
            return;
        }
        for entry in &self.filtered {
            if !self.selection.contains(&entry.item) {
                self.selection.push(entry.item);
            }
        }
    }

    /// Deselect every item present in the filtered view
    ///
    /// Selected items that are currently filtered out stay selected.
    pub fn deselect_all(&mut self) {
        if !self.options.multi {
            return;
        }
        let filtered = &self.filtered;
        self.selection
            .retain(|selected| !filtered.iter().any(|entry| entry.item == *selected));
    }

    /// Replace the selection programmatically
    ///
    /// Equal items are kept once, in first-seen order. A non-empty
    /// selection is returned on accept even in single-select mode.
    pub fn set_selection(&mut self, items: impl IntoIterator<Item = &'a T>) {
        self.selection.clear();
        for item in items {
            if !self.selection.contains(&item) {
                self.selection.push(item);
            }
        }
    }

    /// Whether `item` is currently selected
    #[must_use]
    pub fn is_selected(&self, item: &T) -> bool {
        self.selection.iter().any(|selected| *selected == item)
    }

    // ------------------------------------------------------------------
    // Presentation flags and termination
    // ------------------------------------------------------------------

    /// Show or hide the preview pane
    pub const fn toggle_preview(&mut self) {
        self.show_preview = !self.show_preview;
    }

    /// Show or hide the help screen
    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// End the session, returning the selection
    ///
    /// In multi-select mode, or whenever the selection is non-empty, the
    /// selection is returned as is. Otherwise the item under the cursor is
    /// returned (nothing if the view is empty).
    pub fn accept(&mut self) -> Outcome<'a, T> {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }
        let items = self.result();
        tracing::debug!(returned = items.len(), "selection accepted");
        let outcome = Outcome::Accepted(items);
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// End the session without a result
    pub fn abort(&mut self) -> Outcome<'a, T> {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }
        tracing::debug!("selection aborted");
        self.outcome = Some(Outcome::Aborted);
        Outcome::Aborted
    }

    /// The items accept would return right now
    #[must_use]
    pub fn result(&self) -> Vec<&'a T> {
        if self.options.multi || !self.selection.is_empty() {
            self.selection.clone()
        } else {
            self.current().map(|entry| vec![entry.item]).unwrap_or_default()
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Filter `items` against `query` and commit both, or change nothing
    fn refilter_to(&mut self, items: &'a [T], query: String) -> Result<()> {
        let filtered = filter_items(items, &self.callbacks, &query)?;
        self.items = items;
        self.query = query;
        self.filtered = filtered;
        self.item_cursor.reset();
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(query = %self.query, matches = self.filtered.len(), "refiltered");
        Ok(())
    }
}

impl<'a, T> Engine<'a, T> {
    /// Current query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query cursor, in characters
    #[must_use]
    pub const fn query_cursor(&self) -> usize {
        self.query_cursor.get()
    }

    /// Item cursor (index into [`Engine::filtered`])
    #[must_use]
    pub const fn item_cursor(&self) -> usize {
        self.item_cursor.get()
    }

    /// The ranked, score-positive entries for the current query
    #[must_use]
    pub fn filtered(&self) -> &[FilteredEntry<'a, T>] {
        &self.filtered
    }

    /// The entry under the item cursor
    #[must_use]
    pub fn current(&self) -> Option<&FilteredEntry<'a, T>> {
        self.filtered.get(self.item_cursor.get())
    }

    /// Selected items in selection order
    #[must_use]
    pub fn selection(&self) -> &[&'a T] {
        &self.selection
    }

    /// Total number of items
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Session options
    #[must_use]
    pub const fn options(&self) -> &FinderOptions {
        &self.options
    }

    /// Whether the preview pane should be drawn
    #[must_use]
    pub const fn show_preview(&self) -> bool {
        self.show_preview
    }

    /// Whether the help screen should be drawn
    #[must_use]
    pub const fn show_help(&self) -> bool {
        self.show_help
    }

    /// The final outcome, once the session has ended
    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome<'a, T>> {
        self.outcome.as_ref()
    }

    /// Whether the session has ended
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Counter bumped every time the filtered view is recomputed
    ///
    /// Entries (and their match spans) from different revisions may differ
    /// even when they share an index.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn query_len(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_index)
            .map_or(self.query.len(), |(byte, _)| byte)
    }
}

impl<T> fmt::Debug for Engine<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("items", &self.items.len())
            .field("query", &self.query)
            .field("query_cursor", &self.query_cursor.get())
            .field("item_cursor", &self.item_cursor.get())
            .field("filtered", &self.filtered.len())
            .field("selected", &self.selection.len())
            .field("finished", &self.outcome.is_some())
            .finish_non_exhaustive()
    }
}
