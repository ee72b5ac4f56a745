//! A* search with a pluggable heuristic

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use log::debug;

use super::{
    SearchState,
    node::{SearchNode, Solution, reconstruct_path},
};
use crate::{Error, Result};

/// A frontier entry ordered by `(priority, sequence)`.
///
/// `BinaryHeap` is a max-heap, so `Ord` is reversed: the entry with the
/// lowest `priority = cost + heuristic` compares greatest. Among equal
/// priorities the entry pushed first wins, which keeps the frontier stable
/// and the returned path deterministic.
#[derive(Debug, Clone)]
pub struct PriorityEntry<S> {
    pub priority: u32,
    pub cost: u32,
    /// Insertion counter, unique per search
    pub sequence: u64,
    pub state: S,
}

impl<S> PartialEq for PriorityEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<S> Eq for PriorityEntry<S> {}

impl<S> PartialOrd for PriorityEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for PriorityEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Find a path from `start` to `goal` guided by `heuristic`.
///
/// Each move costs 1. A neighbour is pushed again whenever a strictly
/// cheaper path to it is found; entries made stale by a later improvement
/// are skipped when popped. With an admissible heuristic the result has
/// minimal length.
///
/// # Errors
///
/// Returns [`Error::NoSolutionFound`] if the frontier empties before `goal`
/// is reached.
pub fn astar<S, H>(start: &S, goal: &S, heuristic: H) -> Result<Solution<S::Move>>
where
    S: SearchState,
    H: Fn(&S) -> u32,
{
    let mut nodes = HashMap::new();
    nodes.insert(start.clone(), SearchNode::root());

    let mut sequence = 0;
    let mut frontier = BinaryHeap::new();
    frontier.push(PriorityEntry {
        priority: heuristic(start),
        cost: 0,
        sequence,
        state: start.clone(),
    });
    let mut expanded = 0;

    while let Some(entry) = frontier.pop() {
        let stale = nodes
            .get(&entry.state)
            .is_some_and(|node| node.cost < entry.cost);
        if stale {
            continue;
        }

        if &entry.state == goal {
            let moves = reconstruct_path(&nodes, &entry.state);
            debug!(
                "a* reached goal: {} moves, {expanded} expanded, {} discovered",
                moves.len(),
                nodes.len()
            );
            return Ok(Solution { moves, expanded });
        }

        expanded += 1;
        let tentative = entry.cost + 1;
        for (mv, next) in entry.state.neighbors() {
            let improves = nodes
                .get(&next)
                .is_none_or(|known| tentative < known.cost);
            if !improves {
                continue;
            }
            nodes.insert(
                next.clone(),
                SearchNode::child(entry.state.clone(), mv, tentative),
            );
            sequence += 1;
            frontier.push(PriorityEntry {
                priority: tentative + heuristic(&next),
                cost: tentative,
                sequence,
                state: next,
            });
        }
    }

    debug!("a* exhausted frontier after {expanded} expansions");
    Err(Error::NoSolutionFound { expanded })
}
