//! Event handling for the ratatui TUI
//!
//! Maps keyboard events to engine [`Command`]s.

use crate::finder::Command;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Forward a command to the engine
    Command(Command),
    /// Nothing changed for the engine but the screen must be redrawn
    Redraw,
    /// No action taken
    Ignored,
}

impl From<Command> for EventResult {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}

/// Handle a key while the item list is shown
pub fn handle_normal_mode(key: KeyEvent) -> EventResult {
    let command = match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Command::Abort,
        (KeyCode::Enter, _) => Command::Accept,

        // Navigation
        (KeyCode::Up, _) => Command::MoveItemCursorBy(-1),
        (KeyCode::Down, _) => Command::MoveItemCursorBy(1),
        (KeyCode::PageUp, _) => Command::PageUp,
        (KeyCode::PageDown, _) => Command::PageDown,
        (KeyCode::Home, _) => Command::MoveItemCursorTo(0),
        (KeyCode::End, _) => Command::ItemCursorLast,

        // Selection
        (KeyCode::Tab, _) => Command::ToggleSelection,
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => Command::SelectAll,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Command::DeselectAll,

        // Panes
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Command::TogglePreview,
        (KeyCode::F(1), _) => Command::ToggleHelp,

        // Query editing
        (KeyCode::Left, _) => Command::MoveQueryCursorBy(-1),
        (KeyCode::Right, _) => Command::MoveQueryCursorBy(1),
        (KeyCode::Backspace, _) | (KeyCode::Char('h'), KeyModifiers::CONTROL) => Command::Backspace,
        (KeyCode::Delete, _) => Command::Delete,
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => Command::ResetQuery,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if !c.is_control() => {
            Command::InsertAtCursor(c.to_string())
        }

        _ => return EventResult::Ignored,
    };
    command.into()
}

/// Handle a key while the help overlay is open
///
/// Only closing the overlay and aborting are honoured.
pub fn handle_help_mode(key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::F(1), _) => Command::ToggleHelp.into(),
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Command::Abort.into(),
        _ => EventResult::Ignored,
    }
}

/// Map one terminal event
pub fn handle_event(event: &Event, help_open: bool) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if help_open {
                handle_help_mode(*key)
            } else {
                handle_normal_mode(*key)
            }
        }
        Event::Resize(_, _) => EventResult::Redraw,
        _ => EventResult::Ignored,
    }
}

/// Block until the next terminal event and handle it
///
/// # Errors
///
/// Returns an error if reading the event fails.
pub fn read_and_handle(help_open: bool) -> std::io::Result<EventResult> {
    let event = event::read()?;
    Ok(handle_event(&event, help_open))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_navigation_handling() {
        assert_eq!(
            handle_normal_mode(key(KeyCode::Down)),
            EventResult::Command(Command::MoveItemCursorBy(1))
        );
        assert_eq!(
            handle_normal_mode(key(KeyCode::Up)),
            EventResult::Command(Command::MoveItemCursorBy(-1))
        );
        assert_eq!(
            handle_normal_mode(key(KeyCode::Home)),
            EventResult::Command(Command::MoveItemCursorTo(0))
        );
        assert_eq!(
            handle_normal_mode(key(KeyCode::End)),
            EventResult::Command(Command::ItemCursorLast)
        );
        assert_eq!(
            handle_normal_mode(key(KeyCode::PageDown)),
            EventResult::Command(Command::PageDown)
        );
    }

    #[test]
    fn test_query_input() {
        assert_eq!(
            handle_normal_mode(key(KeyCode::Char('r'))),
            EventResult::Command(Command::InsertAtCursor("r".into()))
        );
        assert_eq!(
            handle_normal_mode(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            EventResult::Command(Command::InsertAtCursor("R".into()))
        );
        assert_eq!(
            handle_normal_mode(key(KeyCode::Char('ß'))),
            EventResult::Command(Command::InsertAtCursor("ß".into()))
        );
        assert_eq!(
            handle_normal_mode(key(KeyCode::Backspace)),
            EventResult::Command(Command::Backspace)
        );
        assert_eq!(handle_normal_mode(ctrl('h')), EventResult::Command(Command::Backspace));
        assert_eq!(
            handle_normal_mode(key(KeyCode::Delete)),
            EventResult::Command(Command::Delete)
        );
        assert_eq!(handle_normal_mode(ctrl('x')), EventResult::Command(Command::ResetQuery));
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(
            handle_normal_mode(key(KeyCode::Tab)),
            EventResult::Command(Command::ToggleSelection)
        );
        assert_eq!(handle_normal_mode(ctrl('a')), EventResult::Command(Command::SelectAll));
        assert_eq!(handle_normal_mode(ctrl('u')), EventResult::Command(Command::DeselectAll));
        assert_eq!(handle_normal_mode(ctrl('p')), EventResult::Command(Command::TogglePreview));
    }

    #[test]
    fn test_abort_and_accept() {
        assert_eq!(handle_normal_mode(key(KeyCode::Esc)), EventResult::Command(Command::Abort));
        assert_eq!(handle_normal_mode(ctrl('c')), EventResult::Command(Command::Abort));
        assert_eq!(
            handle_normal_mode(key(KeyCode::Enter)),
            EventResult::Command(Command::Accept)
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(handle_normal_mode(ctrl('z')), EventResult::Ignored);
        assert_eq!(handle_normal_mode(key(KeyCode::F(5))), EventResult::Ignored);
        assert_eq!(
            handle_normal_mode(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_help_mode_only_closes_or_aborts() {
        assert_eq!(
            handle_help_mode(key(KeyCode::F(1))),
            EventResult::Command(Command::ToggleHelp)
        );
        assert_eq!(handle_help_mode(key(KeyCode::Esc)), EventResult::Command(Command::Abort));
        assert_eq!(handle_help_mode(ctrl('c')), EventResult::Command(Command::Abort));
        assert_eq!(handle_help_mode(key(KeyCode::Char('q'))), EventResult::Ignored);
        assert_eq!(handle_help_mode(key(KeyCode::Enter)), EventResult::Ignored);
    }

    #[test]
    fn test_handle_event() {
        let press = Event::Key(key(KeyCode::Enter));
        assert_eq!(handle_event(&press, false), EventResult::Command(Command::Accept));
        assert_eq!(handle_event(&press, true), EventResult::Ignored);

        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_event(&Event::Key(release), false), EventResult::Ignored);

        assert_eq!(handle_event(&Event::Resize(80, 24), false), EventResult::Redraw);
    }
}
