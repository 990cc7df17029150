//! Commands understood by the selection engine

/// One step of user intent, as produced by a key map or a script
///
/// Indices and offsets are signed so that out-of-range requests can be
/// expressed and then clamped or rejected by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the item cursor to an absolute index (clamped)
    MoveItemCursorTo(isize),
    /// Move the item cursor by a relative offset (clamped)
    MoveItemCursorBy(isize),
    /// Move the item cursor to the last filtered entry
    ItemCursorLast,
    /// Move the item cursor up by one page
    PageUp,
    /// Move the item cursor down by one page
    PageDown,
    /// Move the query cursor to an absolute index (clamped)
    MoveQueryCursorTo(isize),
    /// Move the query cursor by a relative offset (clamped)
    MoveQueryCursorBy(isize),
    /// Insert text into the query at an index (negative counts from the end)
    InsertQuery {
        /// Text to insert
        text: String,
        /// Insertion index; `-1` appends
        index: isize,
    },
    /// Insert text at the query cursor
    InsertAtCursor(String),
    /// Remove characters from the query (negative index counts from the end)
    RemoveQuery {
        /// First character to remove
        index: isize,
        /// Number of characters to remove
        length: isize,
    },
    /// Remove the character before the query cursor (backspace)
    Backspace,
    /// Remove the character at the query cursor (delete)
    Delete,
    /// Clear the query
    ResetQuery,
    /// Replace the whole query
    SetQuery(String),
    /// Toggle selection of the item under the cursor (multi-select)
    ToggleSelection,
    /// Select every item in the filtered view (multi-select)
    SelectAll,
    /// Deselect every item in the filtered view (multi-select)
    DeselectAll,
    /// Show or hide the preview pane
    TogglePreview,
    /// Show or hide the help screen
    ToggleHelp,
    /// Finish the session and return the selection
    Accept,
    /// Cancel the session
    Abort,
}
