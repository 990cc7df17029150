//! Ratatui-based fuzzy finder implementation
//!
//! Draws the engine state with ratatui and turns crossterm key events into
//! engine commands.

use super::events::{EventResult, read_and_handle};
use super::state::ViewState;
use super::theme::Theme;
use super::widgets::{HelpBar, HelpOverlay, ItemList, PreviewPane, SearchBar};
use crate::finder::{self, Command, CommandSource, Engine, Outcome};
use crate::ui::error::{Result, UiError};
use crate::ui::preview::PreviewProvider;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stderr};

/// Terminals narrower than this never show the preview pane
pub const MIN_PREVIEW_WIDTH: u16 = 30;

/// Ratatui-based fuzzy finder implementation
///
/// `T` is the item type of the engines it runs; preview providers receive
/// the highlighted item.
pub struct RatatuiFinder<T> {
    preview_provider: Option<Box<dyn PreviewProvider<T>>>,
    theme: Theme,
}

impl<T> RatatuiFinder<T> {
    /// Create a new ratatui finder
    #[must_use]
    pub fn new() -> Self {
        Self {
            preview_provider: None,
            theme: Theme::default(),
        }
    }

    /// Set a preview provider
    #[must_use]
    pub fn with_preview_provider(mut self, provider: impl PreviewProvider<T> + 'static) -> Self {
        self.preview_provider = Some(Box::new(provider));
        self
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The theme in use
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether a preview provider is configured
    #[must_use]
    pub const fn has_preview(&self) -> bool {
        self.preview_provider.is_some()
    }

    /// Setup terminal for TUI
    ///
    /// The terminal is drawn on stderr so stdout stays free for the result.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stderr);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run an interactive session on `engine`
    ///
    /// Auto-accept is checked before the terminal is touched, so a session
    /// that ends immediately never flashes the screen. The terminal is
    /// restored even if the session fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or read, or if the
    /// engine rejects a command.
    pub fn run<'a>(&self, engine: &mut Engine<'a, T>) -> Result<Outcome<'a, T>>
    where
        T: PartialEq,
    {
        if let Some(outcome) = engine.start() {
            return Ok(outcome);
        }

        tracing::info!(
            items = engine.item_count(),
            multi = engine.options().multi,
            "starting terminal session"
        );

        let terminal = match Self::setup_terminal() {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = Self::cleanup_terminal();
                return Err(e);
            }
        };

        let mut session = TerminalSession {
            terminal,
            finder: self,
            view: ViewState::new(),
        };
        let result = finder::run(engine, &mut session);
        drop(session);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
        }

        result
    }
}

impl<T> Default for RatatuiFinder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A live terminal session: draws the engine and reads key events
///
/// This is the [`CommandSource`] that [`RatatuiFinder::run`] drives the
/// engine with.
pub struct TerminalSession<'f, T> {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    finder: &'f RatatuiFinder<T>,
    view: ViewState,
}

impl<T: PartialEq> CommandSource<T> for TerminalSession<'_, T> {
    type Error = UiError;

    fn next_command(&mut self, engine: &Engine<'_, T>) -> Result<Command> {
        loop {
            let width = self.terminal.size()?.width;
            let preview_visible = engine.show_preview() && width >= MIN_PREVIEW_WIDTH;
            if let Some(provider) = self.finder.preview_provider.as_deref() {
                if preview_visible {
                    self.view.refresh_preview(engine, provider);
                }
            }

            let theme = self.finder.theme();
            let has_preview = self.finder.has_preview();
            let view = &mut self.view;
            self.terminal
                .draw(|frame| render(frame, engine, theme, view, has_preview))?;

            match read_and_handle(engine.show_help())? {
                EventResult::Command(command) => {
                    tracing::trace!(?command, "key mapped to command");
                    return Ok(command);
                }
                EventResult::Redraw | EventResult::Ignored => {}
            }
        }
    }
}

/// Render one frame of the finder
///
/// `has_preview` tells whether a preview provider exists; the pane is shown
/// only if the engine's preview flag is set and the frame is at least
/// [`MIN_PREVIEW_WIDTH`] columns wide.
pub fn render<T: PartialEq>(
    frame: &mut Frame,
    engine: &Engine<'_, T>,
    theme: &Theme,
    view: &mut ViewState,
    has_preview: bool,
) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Content (items + preview)
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let search_bar = SearchBar::new(engine.query(), engine.query_cursor(), theme);
    frame.render_widget(search_bar, main_layout[0]);

    let show_preview = has_preview && engine.show_preview() && area.width >= MIN_PREVIEW_WIDTH;
    let content = if show_preview {
        let percent = engine.options().preview_percent.min(100);
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - percent),
                Constraint::Percentage(percent),
            ])
            .split(main_layout[1])
    } else {
        Layout::default()
            .constraints([Constraint::Percentage(100)])
            .split(main_layout[1])
    };

    // list height minus borders
    view.visible_height = content[0].height.saturating_sub(2) as usize;
    view.scroll_to(engine.item_cursor(), engine.filtered().len());

    let item_list = ItemList::new(engine, theme).offset(view.scroll_offset);
    frame.render_widget(item_list, content[0]);

    if show_preview {
        let preview_pane = PreviewPane::new(view.preview(), theme);
        frame.render_widget(preview_pane, content[1]);
    }

    let hints = HelpBar::default_hints(engine.options().multi);
    frame.render_widget(HelpBar::new(&hints, theme), main_layout[2]);

    if engine.show_help() {
        let help_overlay = HelpOverlay::new(theme, engine.options().page_size);
        frame.render_widget(help_overlay, area);
    }
}
