//! Distance estimates for A*

use serde::{Deserialize, Serialize};

use super::grid::{BLANK, Grid};

/// Which estimate guides A*.
///
/// Both ignore the blank and never overestimate the remaining number of
/// moves. Manhattan dominates Hamming, so it expands fewer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Sum of each tile's row and column distance to its goal cell
    Manhattan,
    /// Number of tiles outside their goal cell
    Hamming,
}

impl Heuristic {
    pub fn estimate<const N: usize>(self, state: &Grid<N>, goal: &Grid<N>) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan(state, goal),
            Heuristic::Hamming => hamming(state, goal),
        }
    }

    /// Bind this heuristic to `goal`, precomputing goal positions.
    pub fn towards<const N: usize>(self, goal: &Grid<N>) -> Estimator<N> {
        Estimator::new(self, goal)
    }
}

/// A heuristic bound to a fixed goal.
#[derive(Debug, Clone)]
pub struct Estimator<const N: usize> {
    kind: Heuristic,
    goal: Grid<N>,
    /// Goal cell of each tile, indexed by tile value
    targets: Vec<(usize, usize)>,
}

impl<const N: usize> Estimator<N> {
    pub fn new(kind: Heuristic, goal: &Grid<N>) -> Self {
        let mut targets = vec![(0, 0); Grid::<N>::CELLS];
        for (row, cells) in goal.tiles().iter().enumerate() {
            for (col, &tile) in cells.iter().enumerate() {
                targets[usize::from(tile)] = (row, col);
            }
        }
        Self {
            kind,
            goal: *goal,
            targets,
        }
    }

    pub fn kind(&self) -> Heuristic {
        self.kind
    }

    pub fn estimate(&self, state: &Grid<N>) -> u32 {
        match self.kind {
            Heuristic::Manhattan => self.manhattan(state),
            Heuristic::Hamming => hamming(state, &self.goal),
        }
    }

    fn manhattan(&self, state: &Grid<N>) -> u32 {
        let mut distance = 0;
        for (row, cells) in state.tiles().iter().enumerate() {
            for (col, &tile) in cells.iter().enumerate() {
                if tile == BLANK {
                    continue;
                }
                let (goal_row, goal_col) = self.targets[usize::from(tile)];
                distance += row.abs_diff(goal_row) + col.abs_diff(goal_col);
            }
        }
        distance as u32
    }
}

/// Manhattan distance from `state` to `goal`.
pub fn manhattan<const N: usize>(state: &Grid<N>, goal: &Grid<N>) -> u32 {
    Estimator::new(Heuristic::Manhattan, goal).manhattan(state)
}

/// Count of non-blank tiles not on their goal cell.
pub fn hamming<const N: usize>(state: &Grid<N>, goal: &Grid<N>) -> u32 {
    state
        .tiles()
        .iter()
        .flatten()
        .zip(goal.tiles().iter().flatten())
        .filter(|&(&tile, &target)| tile != BLANK && tile != target)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::EightPuzzle;

    #[test]
    fn goal_scores_zero() {
        let goal = EightPuzzle::solved();
        assert_eq!(manhattan(&goal, &goal), 0);
        assert_eq!(hamming(&goal, &goal), 0);
    }

    #[test]
    fn known_position_values() {
        let goal = EightPuzzle::solved();
        let state = EightPuzzle::new([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        // 5 is one row low, 8 one column left
        assert_eq!(manhattan(&state, &goal), 2);
        assert_eq!(hamming(&state, &goal), 2);

        let far = EightPuzzle::new([[8, 7, 6], [5, 4, 3], [2, 1, 0]]).unwrap();
        assert_eq!(hamming(&far, &goal), 8);
        assert_eq!(manhattan(&far, &goal), 16);
    }

    #[test]
    fn estimator_agrees_with_free_functions() {
        let goal = EightPuzzle::new([[0, 1, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        let state: EightPuzzle = "8 6 7 2 5 4 3 0 1".parse().unwrap();

        for kind in [Heuristic::Manhattan, Heuristic::Hamming] {
            assert_eq!(
                kind.towards(&goal).estimate(&state),
                kind.estimate(&state, &goal)
            );
        }
    }
}
