//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Player, Position, TicTacToe};
pub use game::{GameOutcome, MatchRecord, PlayedMove, play_match};
pub use lines::LineAnalyzer;
