//! Ratatui-based terminal front end
//!
//! Renders an [`Engine`](crate::finder::Engine) with ratatui and feeds it
//! commands decoded from crossterm key events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiFinder::run                │
//! │  (drives a TerminalSession: CommandSource)  │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   Engine   │ │  Ratatui  │ │ Crossterm │
//! │  (state)   │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Features
//!
//! - **Match highlighting** of the spans reported by the scorer
//! - **Preview pane** fed by a [`PreviewProvider`](crate::ui::PreviewProvider)
//! - **Help overlay** (F1)

mod events;
mod finder;
mod state;
mod theme;
pub mod widgets;

pub use events::{EventResult, handle_event, handle_help_mode, handle_normal_mode};
pub use finder::{MIN_PREVIEW_WIDTH, RatatuiFinder, TerminalSession, render};
pub use state::ViewState;
pub use theme::Theme;
