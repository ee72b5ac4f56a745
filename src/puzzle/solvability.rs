//! Reachability test based on permutation parity

use super::grid::Grid;

/// Count pairs of non-blank tiles that appear in decreasing order when the
/// board is read row by row.
pub fn inversion_count<const N: usize>(grid: &Grid<N>) -> usize {
    let flat: Vec<u8> = grid.non_blank_tiles().collect();
    flat.iter()
        .enumerate()
        .map(|(i, &a)| flat[i + 1..].iter().filter(|&&b| a > b).count())
        .sum()
}

/// The parity class a grid belongs to.
///
/// On odd widths every move preserves the inversion parity. On even widths
/// a vertical move flips both the inversion parity and the blank's row
/// parity, so their sum is the invariant.
pub fn parity<const N: usize>(grid: &Grid<N>) -> usize {
    let inversions = inversion_count(grid);
    if N % 2 == 1 {
        inversions % 2
    } else {
        (inversions + grid.blank().0) % 2
    }
}

/// Whether `goal` can be reached from `start`.
pub fn is_solvable<const N: usize>(start: &Grid<N>, goal: &Grid<N>) -> bool {
    parity(start) == parity(goal)
}

/// Fail fast when `goal` is out of reach.
///
/// # Errors
///
/// Returns [`crate::Error::Unsolvable`] when the parities differ.
pub fn ensure_solvable<const N: usize>(start: &Grid<N>, goal: &Grid<N>) -> crate::Result<()> {
    let start_parity = parity(start);
    let goal_parity = parity(goal);
    if start_parity == goal_parity {
        Ok(())
    } else {
        Err(crate::Error::Unsolvable {
            start_parity,
            goal_parity,
        })
    }
}
