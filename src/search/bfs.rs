//! Breadth-first search

use std::collections::{HashMap, VecDeque, hash_map::Entry};

use log::debug;

use super::{
    SearchState,
    node::{SearchNode, Solution, reconstruct_path},
};
use crate::{Error, Result};

/// Find a path with the fewest moves from `start` to `goal`.
///
/// States are marked visited when they are enqueued, so each state enters
/// the FIFO frontier at most once.
///
/// # Errors
///
/// Returns [`Error::NoSolutionFound`] if the frontier empties before `goal`
/// is reached.
pub fn bfs<S: SearchState>(start: &S, goal: &S) -> Result<Solution<S::Move>> {
    let mut nodes = HashMap::new();
    nodes.insert(start.clone(), SearchNode::root());
    let mut frontier = VecDeque::from([start.clone()]);
    let mut expanded = 0;

    while let Some(current) = frontier.pop_front() {
        if &current == goal {
            let moves = reconstruct_path(&nodes, &current);
            debug!(
                "bfs reached goal: {} moves, {expanded} expanded, {} discovered",
                moves.len(),
                nodes.len()
            );
            return Ok(Solution { moves, expanded });
        }

        expanded += 1;
        let cost = nodes.get(&current).map_or(0, |node| node.cost) + 1;
        for (mv, next) in current.neighbors() {
            if let Entry::Vacant(slot) = nodes.entry(next.clone()) {
                slot.insert(SearchNode::child(current.clone(), mv, cost));
                frontier.push_back(next);
            }
        }
    }

    debug!("bfs exhausted frontier after {expanded} expansions");
    Err(Error::NoSolutionFound { expanded })
}
