//! Winning line analysis for NxN tic-tac-toe

use std::collections::BTreeSet;

use super::{Cell, Player, Position};

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// All `2N + 2` lines of an `N`x`N` board: rows, columns, then the
    /// main and anti diagonals.
    pub fn lines<const N: usize>() -> Vec<[Position; N]> {
        let mut lines = Vec::with_capacity(2 * N + 2);
        for r in 0..N {
            lines.push(std::array::from_fn(|c| Position::new(r, c)));
        }
        for c in 0..N {
            lines.push(std::array::from_fn(|r| Position::new(r, c)));
        }
        lines.push(std::array::from_fn(|i| Position::new(i, i)));
        lines.push(std::array::from_fn(|i| Position::new(i, N - 1 - i)));
        lines
    }

    /// Check if a player holds every cell of some line
    pub fn has_won<const N: usize>(cells: &[[Cell; N]; N], player: Player) -> bool {
        let target = player.to_cell();
        let row = cells.iter().any(|row| row.iter().all(|&c| c == target));
        let col = (0..N).any(|c| (0..N).all(|r| cells[r][c] == target));
        let diag = (0..N).all(|i| cells[i][i] == target);
        let anti = (0..N).all(|i| cells[i][N - 1 - i] == target);
        row || col || diag || anti
    }

    /// Find all positions that would immediately win for the player
    pub fn winning_moves<const N: usize>(cells: &[[Cell; N]; N], player: Player) -> BTreeSet<Position> {
        Self::lines::<N>()
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect()
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line<const N: usize>(
        cells: &[[Cell; N]; N],
        player: Player,
        line: &[Position; N],
    ) -> Option<Position> {
        let target = player.to_cell();
        let mut empty_pos = None;

        for &pos in line {
            match cells[pos.row][pos.col] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(pos);
                }
                c if c == target => {}
                _ => return None,
            }
        }
        empty_pos
    }
}
