//! Two-player zero-sum game-tree search
//!
//! One engine covers plain minimax and alpha-beta pruning; the
//! [`Strategy`] value picks which. Scores are from the searching player's
//! point of view:
//!
//! - `win_score - depth` when the searching player has won
//! - `depth - win_score` when the opponent has won
//! - `0` for a draw or a position cut off by the depth limit
//!
//! so faster wins and slower losses are preferred.

pub mod engine;
pub mod instrument;
pub mod selector;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use engine::SearchEngine;
pub use instrument::{StrategyComparison, compare_strategies, count_nodes};
pub use selector::{MoveSelector, best_move};

/// A turn-based perfect-information game the engine can search.
///
/// The engine mutates the position in place: every [`place`] is paired
/// with an [`undo`] of the same move before siblings are tried.
///
/// [`place`]: AdversarialGame::place
/// [`undo`]: AdversarialGame::undo
pub trait AdversarialGame {
    type Move: Copy + Eq + fmt::Debug;
    type Player: Copy + Eq + fmt::Debug;

    /// Moves available in enumeration order. Tie-breaks follow this order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn place(&mut self, mv: Self::Move, player: Self::Player);

    fn undo(&mut self, mv: Self::Move);

    fn has_won(&self, player: Self::Player) -> bool;

    /// Score of an immediate win; must exceed the deepest possible ply.
    fn win_score(&self) -> i32;

    /// No move has been made yet.
    fn is_untouched(&self) -> bool;
}

/// Which search variant to run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Exhaustive minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

impl Strategy {
    pub fn prunes(self) -> bool {
        matches!(self, Strategy::AlphaBeta)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => f.write_str("minimax"),
            Strategy::AlphaBeta => f.write_str("alpha-beta"),
        }
    }
}

/// Result of choosing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision<M> {
    #[serde(rename = "move")]
    pub mv: M,
    pub score: i32,
    pub nodes_visited: u64,
    /// The move was drawn at random on an untouched board, no search ran
    pub random_opening: bool,
}
