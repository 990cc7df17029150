//! Session driver
//!
//! A [`CommandSource`] produces commands (a terminal, a test script, a
//! remote control); [`run`] feeds them to an [`Engine`] until the session
//! ends.

use super::command::Command;
use super::engine::{Engine, Outcome, Step};
use super::error::FinderError;
use std::collections::VecDeque;

/// Anything that can produce the next command for an engine
pub trait CommandSource<T> {
    /// Error type of the source; engine errors convert into it
    type Error: From<FinderError>;

    /// Produce the next command
    ///
    /// The engine is passed read-only so interactive sources can render
    /// the current state before waiting for input.
    fn next_command(&mut self, engine: &Engine<'_, T>) -> Result<Command, Self::Error>;
}

/// Drive `engine` with commands from `source` until the session ends
///
/// Auto-accept is checked once before the first command is requested.
///
/// # Errors
///
/// Returns the first error produced by the source or the engine.
pub fn run<'a, T, S>(engine: &mut Engine<'a, T>, source: &mut S) -> Result<Outcome<'a, T>, S::Error>
where
    T: PartialEq,
    S: CommandSource<T>,
{
    if let Some(outcome) = engine.start() {
        tracing::info!(aborted = outcome.is_aborted(), "session ended before input");
        return Ok(outcome);
    }

    loop {
        let command = source.next_command(engine)?;
        if let Step::Done(outcome) = engine.apply(command)? {
            tracing::info!(aborted = outcome.is_aborted(), "session ended");
            return Ok(outcome);
        }
    }
}

/// A fixed list of commands
///
/// Once the list runs out the script aborts the session.
#[derive(Debug, Clone, Default)]
pub struct Script {
    commands: VecDeque<Command>,
}

impl Script {
    /// Create a script from a sequence of commands
    #[must_use]
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    /// Append the commands that type `text` character by character
    #[must_use]
    pub fn typing(mut self, text: &str) -> Self {
        self.commands
            .extend(text.chars().map(|c| Command::InsertAtCursor(c.to_string())));
        self
    }

    /// Append one command
    #[must_use]
    pub fn then(mut self, command: Command) -> Self {
        self.commands.push_back(command);
        self
    }

    /// Number of commands not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl<T> CommandSource<T> for Script {
    type Error = FinderError;

    fn next_command(&mut self, _engine: &Engine<'_, T>) -> Result<Command, Self::Error> {
        Ok(self.commands.pop_front().unwrap_or(Command::Abort))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::{Callbacks, FinderOptions};

    #[test]
    fn test_run_until_accept() {
        let items = ["red", "green", "blue"];
        let mut engine = Engine::new(&items, Callbacks::default(), FinderOptions::default()).unwrap();
        let mut script = Script::default().typing("gre").then(Command::Accept);
        let outcome = run(&mut engine, &mut script).unwrap();
        assert_eq!(outcome, Outcome::Accepted(vec![&"green"]));
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    fn test_exhausted_script_aborts() {
        let items = ["red"];
        let mut engine = Engine::new(&items, Callbacks::default(), FinderOptions::default()).unwrap();
        let mut script = Script::new([Command::MoveItemCursorBy(1)]);
        let outcome = run(&mut engine, &mut script).unwrap();
        assert!(outcome.is_aborted());
    }

    #[test]
    fn test_auto_accept_skips_input() {
        let items = ["red", "green", "blue"];
        let options = FinderOptions::default().with_query("blu").with_auto_accept(1);
        let mut engine = Engine::new(&items, Callbacks::default(), options).unwrap();
        let mut script = Script::new([Command::Abort]);
        let outcome = run(&mut engine, &mut script).unwrap();
        assert_eq!(outcome.into_accepted(), Some(vec![&"blue"]));
        assert_eq!(script.remaining(), 1);
    }

    #[test]
    fn test_engine_errors_propagate() {
        let items = ["red"];
        let mut engine = Engine::new(&items, Callbacks::default(), FinderOptions::default()).unwrap();
        let mut script = Script::new([Command::InsertQuery {
            text: "x".into(),
            index: 5,
        }]);
        let err = run(&mut engine, &mut script).unwrap_err();
        assert!(err.is_index_out_of_bounds());
    }
}
