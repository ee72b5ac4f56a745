//! Move source port - where the next move of a game loop comes from
//!
//! A game loop never reads a device directly. It asks a [`MoveSource`] for
//! the next command, which lets the same loop be driven by:
//! - A human frontend (keyboard, terminal prompt, GUI) living outside the crate
//! - A search engine (see [`crate::adapters::SearchPlayer`])
//! - A pre-recorded script in tests

use std::collections::VecDeque;

use crate::Result;

/// What a move source wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<M> {
    /// Apply this move
    Play(M),
    /// Stop the loop without finishing the game
    Quit,
}

/// Supplier of moves for a state of type `S`.
///
/// # Design Philosophy
///
/// This trait is a **port**: the loops in [`crate::puzzle::PuzzleSession`]
/// and [`crate::tictactoe::play_match`] depend on it, and frontends provide
/// adapters for it. Implementations only propose moves; legality is checked
/// by the loop, which rejects illegal proposals before touching any state.
pub trait MoveSource<S, M> {
    /// Name used in logs and match records.
    fn name(&self) -> &str;

    /// Produce the next command for `state`.
    ///
    /// # Errors
    ///
    /// Implementations may fail if they cannot produce a move, for example
    /// when a search is asked to move on a finished game.
    fn next_command(&mut self, state: &S) -> Result<Command<M>>;
}

/// Replays a fixed list of commands, then quits.
#[derive(Debug, Clone)]
pub struct ScriptedSource<M> {
    name: String,
    commands: VecDeque<Command<M>>,
}

impl<M> ScriptedSource<M> {
    pub fn new(name: impl Into<String>, commands: impl IntoIterator<Item = Command<M>>) -> Self {
        Self {
            name: name.into(),
            commands: commands.into_iter().collect(),
        }
    }

    /// Script that plays `moves` in order.
    pub fn from_moves(name: impl Into<String>, moves: impl IntoIterator<Item = M>) -> Self {
        Self::new(name, moves.into_iter().map(Command::Play))
    }

    /// Commands not yet handed out.
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl<S, M> MoveSource<S, M> for ScriptedSource<M> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_command(&mut self, _state: &S) -> Result<Command<M>> {
        Ok(self.commands.pop_front().unwrap_or(Command::Quit))
    }
}

/// Adapts a closure into a move source.
pub struct FnSource<F> {
    name: String,
    next: F,
}

impl<F> FnSource<F> {
    pub fn new(name: impl Into<String>, next: F) -> Self {
        Self {
            name: name.into(),
            next,
        }
    }
}

impl<S, M, F> MoveSource<S, M> for FnSource<F>
where
    F: FnMut(&S) -> Result<Command<M>>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn next_command(&mut self, state: &S) -> Result<Command<M>> {
        (self.next)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_quits_when_exhausted() {
        let mut script = ScriptedSource::from_moves("script", [1, 2]);
        assert_eq!(script.next_command(&()).unwrap(), Command::Play(1));
        assert_eq!(script.next_command(&()).unwrap(), Command::Play(2));
        assert_eq!(script.remaining(), 0);
        assert_eq!(script.next_command(&()).unwrap(), Command::Quit);
    }

    #[test]
    fn closure_source_sees_state() {
        let mut source = FnSource::new("echo", |state: &u32| -> Result<Command<u32>> {
            Ok(Command::Play(*state * 2))
        });
        assert_eq!(source.next_command(&21).unwrap(), Command::Play(42));
        assert_eq!(MoveSource::<u32, u32>::name(&source), "echo");
    }
}
