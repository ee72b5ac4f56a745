//! Search nodes, the predecessor table and solved paths

use std::{collections::HashMap, hash::Hash};

use serde::Serialize;

/// Bookkeeping for one discovered state.
///
/// The node table maps each state to its `SearchNode`; together they form
/// the (state, predecessor, move, cost) tuple. The table doubles as the
/// visited set and the best-known-cost map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, M> {
    /// State this one was reached from (`None` for the start state)
    pub parent: Option<S>,
    /// Move applied to `parent` to produce this state
    pub via: Option<M>,
    /// Path cost from the start state
    pub cost: u32,
}

impl<S, M> SearchNode<S, M> {
    pub fn root() -> Self {
        Self {
            parent: None,
            via: None,
            cost: 0,
        }
    }

    pub fn child(parent: S, via: M, cost: u32) -> Self {
        Self {
            parent: Some(parent),
            via: Some(via),
            cost,
        }
    }
}

pub(crate) type NodeTable<S, M> = HashMap<S, SearchNode<S, M>>;

/// Walk predecessor links back from `goal` and return the moves in
/// start-to-goal order.
pub(crate) fn reconstruct_path<S, M>(nodes: &NodeTable<S, M>, goal: &S) -> Vec<M>
where
    S: Eq + Hash,
    M: Copy,
{
    let mut moves = Vec::new();
    let mut current = goal;
    while let Some(node) = nodes.get(current) {
        let (Some(parent), Some(mv)) = (node.parent.as_ref(), node.via) else {
            break;
        };
        moves.push(mv);
        current = parent;
    }
    moves.reverse();
    moves
}

/// A path from start to goal plus how much work it took to find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution<M> {
    pub moves: Vec<M>,
    /// Number of states taken off the frontier and expanded
    pub expanded: usize,
}

impl<M> Solution<M> {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstructs_moves_in_forward_order() {
        let mut nodes: NodeTable<u8, char> = HashMap::new();
        nodes.insert(0, SearchNode::root());
        nodes.insert(1, SearchNode::child(0, 'a', 1));
        nodes.insert(2, SearchNode::child(1, 'b', 2));
        nodes.insert(3, SearchNode::child(2, 'c', 3));

        assert_eq!(reconstruct_path(&nodes, &3), vec!['a', 'b', 'c']);
    }

    #[test]
    fn start_state_has_empty_path() {
        let mut nodes: NodeTable<u8, char> = HashMap::new();
        nodes.insert(7, SearchNode::root());

        assert!(reconstruct_path(&nodes, &7).is_empty());
    }
}
