//! Step-by-step puzzle play

use log::info;

use super::{direction::Direction, grid::Grid};
use crate::{
    Result,
    ports::{Command, MoveSource},
};

/// How a session run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The goal was reached after this many moves
    Solved { moves: usize },
    /// The source quit before reaching the goal
    Quit { moves: usize },
}

/// A puzzle being played one move at a time.
///
/// Used both for manual play (moves come from a frontend through a
/// [`MoveSource`]) and for replaying a computed solution.
#[derive(Debug, Clone)]
pub struct PuzzleSession<const N: usize> {
    current: Grid<N>,
    goal: Grid<N>,
    moves: usize,
}

impl<const N: usize> PuzzleSession<N> {
    pub fn new(start: Grid<N>, goal: Grid<N>) -> Self {
        Self {
            current: start,
            goal,
            moves: 0,
        }
    }

    pub fn current(&self) -> &Grid<N> {
        &self.current
    }

    pub fn goal(&self) -> &Grid<N> {
        &self.goal
    }

    /// Moves applied so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.current == self.goal
    }

    /// Apply one move and report whether the goal is now reached.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the blank cannot move in
    /// `dir`; the session is unchanged in that case.
    pub fn apply(&mut self, dir: Direction) -> Result<bool> {
        self.current = self.current.apply(dir)?;
        self.moves += 1;
        Ok(self.is_solved())
    }

    /// Apply a whole solution.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal move. Moves before it stay applied.
    pub fn replay(&mut self, solution: &[Direction]) -> Result<bool> {
        for &dir in solution {
            self.apply(dir)?;
        }
        Ok(self.is_solved())
    }

    /// Drive the session from `source` until solved or quit.
    ///
    /// # Errors
    ///
    /// Propagates source failures and illegal moves.
    pub fn run(&mut self, source: &mut dyn MoveSource<Grid<N>, Direction>) -> Result<SessionOutcome> {
        while !self.is_solved() {
            match source.next_command(&self.current)? {
                Command::Play(dir) => {
                    self.apply(dir)?;
                }
                Command::Quit => {
                    info!("{} quit after {} moves", source.name(), self.moves);
                    return Ok(SessionOutcome::Quit { moves: self.moves });
                }
            }
        }
        info!("puzzle solved in {} moves", self.moves);
        Ok(SessionOutcome::Solved { moves: self.moves })
    }
}
