//! Ratatui widgets for the fuzzy finder TUI
//!
//! Custom widgets for rendering the finder interface.

mod help_bar;
mod help_overlay;
mod item_list;
mod preview_pane;
mod search_bar;

pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use item_list::{ItemList, SELECTED_MARKER, UNSELECTED_MARKER, highlight_spans};
pub use preview_pane::PreviewPane;
pub use search_bar::{PROMPT, SearchBar};
