//! Sliding-tile puzzles and their solvers

pub mod direction;
pub mod grid;
pub mod heuristic;
pub mod session;
pub mod solvability;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

pub use direction::Direction;
pub use grid::{BLANK, EightPuzzle, FifteenPuzzle, Grid};
pub use heuristic::{Estimator, Heuristic, hamming, manhattan};
pub use session::{PuzzleSession, SessionOutcome};
pub use solvability::{ensure_solvable, inversion_count, is_solvable, parity};

use crate::{
    Result,
    search::{Solution, astar, bfs},
};

/// Solver used for a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Breadth-first search
    Bfs,
    /// A* guided by Manhattan distance
    #[value(name = "astar-manhattan")]
    AstarManhattan,
    /// A* guided by misplaced-tile count
    #[value(name = "astar-hamming")]
    AstarHamming,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::AstarManhattan,
        Algorithm::AstarHamming,
        Algorithm::Bfs,
    ];

    pub fn heuristic(self) -> Option<Heuristic> {
        match self {
            Algorithm::Bfs => None,
            Algorithm::AstarManhattan => Some(Heuristic::Manhattan),
            Algorithm::AstarHamming => Some(Heuristic::Hamming),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::AstarManhattan => "A* (Manhattan)",
            Algorithm::AstarHamming => "A* (Hamming)",
        }
    }
}

/// Solve `start` → `goal` with `algorithm`.
///
/// The parity check runs first, so an unreachable goal fails immediately
/// instead of exhausting half the state space.
///
/// # Errors
///
/// [`crate::Error::Unsolvable`] on a parity mismatch;
/// [`crate::Error::NoSolutionFound`] if the search exhausts its frontier.
pub fn solve<const N: usize>(
    start: &Grid<N>,
    goal: &Grid<N>,
    algorithm: Algorithm,
) -> Result<Solution<Direction>> {
    ensure_solvable(start, goal)?;
    debug!("solving {N}x{N} puzzle with {}", algorithm.label());

    match algorithm.heuristic() {
        None => bfs(start, goal),
        Some(kind) => {
            let estimator = kind.towards(goal);
            astar(start, goal, |state| estimator.estimate(state))
        }
    }
}

/// Run every algorithm on the same pair, in [`Algorithm::ALL`] order.
///
/// # Errors
///
/// Fails if any solver fails.
pub fn solve_all<const N: usize>(
    start: &Grid<N>,
    goal: &Grid<N>,
) -> Result<Vec<(Algorithm, Solution<Direction>)>> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| Ok((algorithm, solve(start, goal, algorithm)?)))
        .collect()
}
