//! fzpick - interactive fuzzy selection with full-word scoring
//!
//! This library provides a terminal fuzzy finder that can be embedded in
//! other programs: hand it a slice of items, get back the ones the user
//! picked.
//!
//! - [`scoring`] ranks a candidate string against a query word by word
//! - [`finder`] is the UI-agnostic selection engine (query editing, cursor
//!   movement, multi-select, auto-accept, preselection)
//! - [`ui`] draws the engine in the terminal with ratatui
//!
//! # Example
//!
//! ```no_run
//! use fzpick::finder::{Callbacks, Engine, FinderOptions};
//! use fzpick::ui::RatatuiFinder;
//!
//! # fn main() -> fzpick::Result<()> {
//! let colors = ["red", "green", "blue"];
//! let options = FinderOptions::default().with_multi(true);
//! let mut engine = Engine::new(&colors, Callbacks::default(), options)?;
//!
//! if let Some(picked) = RatatuiFinder::new().run(&mut engine)?.into_accepted() {
//!     println!("{picked:?}");
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod finder;
pub mod logging;
pub mod scoring;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FzpickError {
    /// The engine rejected its input or a command
    #[error("Finder error: {0}")]
    Finder(#[from] finder::FinderError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serializing the selection failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using [`FzpickError`]
pub type Result<T> = std::result::Result<T, FzpickError>;
