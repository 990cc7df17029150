//! Terminal front end
//!
//! The [`finder`](crate::finder) engine is UI-agnostic; this module puts it
//! on screen. [`RatatuiFinder`] owns the terminal for one session, maps keys
//! to commands and renders the search bar, the ranked item list with match
//! highlighting, an optional preview pane and the help overlay.
//!
//! # Running a session
//!
//! ```no_run
//! use fzpick::finder::{Callbacks, Engine, FinderOptions, Outcome};
//! use fzpick::ui::{CommandPreview, RatatuiFinder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let files = ["Cargo.toml", "src/lib.rs", "src/main.rs"];
//! let mut engine = Engine::new(&files, Callbacks::default(), FinderOptions::default())?;
//!
//! let finder = RatatuiFinder::new().with_preview_provider(CommandPreview::new("head -n 20 {}"));
//! match finder.run(&mut engine)? {
//!     Outcome::Accepted(picked) => println!("{picked:?}"),
//!     Outcome::Aborted => eprintln!("aborted"),
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod preview;

pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use preview::{CommandPreview, PLACEHOLDER, PreviewProvider, PreviewText, shell_quote};
pub use ratatui_adapter::{RatatuiFinder, Theme};
