//! Classic state-space search over small combinatorial games
//!
//! This crate provides:
//! - Sliding-tile puzzles (8-puzzle, 15-puzzle) with a parity solvability check
//! - Breadth-first and A* search with Manhattan and Hamming heuristics
//! - Tic-tac-toe on NxN boards
//! - Minimax and alpha-beta game-tree search with node-count instrumentation
//! - Game loops driven by injected move sources

pub mod adapters;
pub mod adversarial;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod puzzle;
pub mod search;
pub mod tictactoe;

pub use adversarial::{AdversarialGame, Decision, Strategy};
pub use error::{Error, Result};
pub use puzzle::{Algorithm, Direction, EightPuzzle, FifteenPuzzle, Grid};
pub use search::{SearchState, Solution};
pub use tictactoe::{Board, Player, Position, TicTacToe};
