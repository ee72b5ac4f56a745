//! Single-agent search over implicit state graphs
//!
//! Both engines work on any [`SearchState`]: a hashable value that can
//! enumerate its successors. Every move costs 1, so breadth-first search and
//! A* with an admissible heuristic return paths of the same length.

use std::{fmt, hash::Hash};

pub mod astar;
pub mod bfs;
pub mod node;

pub use astar::{PriorityEntry, astar};
pub use bfs::bfs;
pub use node::{SearchNode, Solution};

/// A configuration in a single-agent search problem.
///
/// `Eq` and `Hash` must agree on a canonical form, since states are used as
/// keys of the visited table.
pub trait SearchState: Clone + Eq + Hash {
    /// The action that transforms one state into a successor.
    type Move: Copy + fmt::Debug;

    /// Legal successors of this state.
    ///
    /// The order must be fixed for a given state: engines break ties by it,
    /// so a stable order is what makes their output reproducible.
    fn neighbors(&self) -> Vec<(Self::Move, Self)>;
}
