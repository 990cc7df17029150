//! Fuzzy selection engine
//!
//! The [`Engine`] owns the query, the item cursor, the query cursor, the
//! ranked view of matching items and the multi-select set. It knows nothing
//! about terminals: front ends turn user input into [`Command`]s and render
//! the engine's read-only accessors.
//!
//! # Example
//!
//! ```
//! use fzpick::finder::{Callbacks, Command, Engine, FinderOptions, Outcome, Script, run};
//!
//! let fruits = ["apple pie", "banana split", "cherry tart"];
//! let mut engine = Engine::new(&fruits, Callbacks::default(), FinderOptions::default())?;
//! let mut script = Script::default().typing("split").then(Command::Accept);
//!
//! let outcome = run(&mut engine, &mut script)?;
//! assert_eq!(outcome, Outcome::Accepted(vec![&"banana split"]));
//! # Ok::<(), fzpick::finder::FinderError>(())
//! ```

mod callbacks;
mod command;
mod cursor;
mod engine;
mod error;
mod filter;
mod options;
mod session;

pub use callbacks::Callbacks;
pub use command::Command;
pub use cursor::BoundedCursor;
pub use engine::{Engine, Outcome, Step};
pub use error::{FinderError, Result};
pub use filter::{FilteredEntry, filter_items, is_multiline};
pub use options::FinderOptions;
pub use session::{CommandSource, Script, run};
