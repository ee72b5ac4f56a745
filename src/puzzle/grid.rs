//! Sliding-tile puzzle board

use std::{collections::HashSet, fmt, str::FromStr};

use super::direction::Direction;
use crate::search::SearchState;

/// Value of the blank cell.
pub const BLANK: u8 = 0;

/// An `N`x`N` sliding-tile configuration.
///
/// Holds each of `0..N*N` exactly once, with `0` as the blank. The
/// constructors reject anything else, so every `Grid` that exists is a valid
/// puzzle state. This type implements `Copy` since it is a small fixed-size
/// array.
///
/// Tiles are stored as `u8`, so `N` is at most 16. Larger widths fail to
/// compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<const N: usize> {
    tiles: [[u8; N]; N],
}

/// The 8-puzzle.
pub type EightPuzzle = Grid<3>;

/// The 15-puzzle.
pub type FifteenPuzzle = Grid<4>;

impl<const N: usize> Grid<N> {
    /// Number of cells on the board.
    pub const CELLS: usize = N * N;

    const FITS_IN_U8: () = assert!(N * N <= 256, "tile values must fit in a u8");

    /// Build a grid from rows, validating that it is a permutation of
    /// `0..N*N`.
    ///
    /// # Errors
    ///
    /// Returns an error on an out-of-range tile, a repeated tile, or a
    /// missing blank.
    pub fn new(tiles: [[u8; N]; N]) -> Result<Self, crate::Error> {
        Self::validate(tiles.iter().flatten().copied())?;
        Ok(Self { tiles })
    }

    /// The conventional goal: tiles in ascending order, blank last.
    pub fn solved() -> Self {
        let () = Self::FITS_IN_U8;
        let mut tiles = [[BLANK; N]; N];
        for (i, tile) in tiles.iter_mut().flatten().enumerate() {
            *tile = if i + 1 == Self::CELLS { BLANK } else { (i + 1) as u8 };
        }
        Self { tiles }
    }

    fn validate(values: impl Iterator<Item = u8>) -> Result<(), crate::Error> {
        let () = Self::FITS_IN_U8;
        let mut seen = HashSet::with_capacity(Self::CELLS);
        for tile in values {
            if usize::from(tile) >= Self::CELLS {
                return Err(crate::Error::InvalidTile {
                    token: tile.to_string(),
                    width: N,
                });
            }
            if !seen.insert(tile) {
                return Err(crate::Error::DuplicateTile { tile });
            }
        }
        if !seen.contains(&BLANK) {
            return Err(crate::Error::MissingBlank);
        }
        Ok(())
    }

    pub fn tiles(&self) -> &[[u8; N]; N] {
        &self.tiles
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.tiles[row][col]
    }

    /// Row and column of `tile`, if it is on the board.
    pub fn position_of(&self, tile: u8) -> Option<(usize, usize)> {
        (0..N)
            .flat_map(|row| (0..N).map(move |col| (row, col)))
            .find(|&(row, col)| self.tiles[row][col] == tile)
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        // Every constructor guarantees exactly one blank.
        self.position_of(BLANK).unwrap_or((0, 0))
    }

    /// Non-blank tiles in row-major order.
    pub fn non_blank_tiles(&self) -> impl Iterator<Item = u8> + '_ {
        self.tiles.iter().flatten().copied().filter(|&t| t != BLANK)
    }

    /// Apply `dir` if the blank can move that way.
    pub fn try_apply(&self, dir: Direction) -> Option<Self> {
        let (row, col) = self.blank();
        let (dr, dc) = dir.delta();
        let target_row = row.checked_add_signed(dr).filter(|&r| r < N)?;
        let target_col = col.checked_add_signed(dc).filter(|&c| c < N)?;

        let mut next = *self;
        next.tiles[row][col] = self.tiles[target_row][target_col];
        next.tiles[target_row][target_col] = BLANK;
        Some(next)
    }

    /// Apply `dir`, returning a new grid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] when the blank sits on the
    /// boundary in that direction. `self` is never modified.
    #[must_use = "apply returns a new grid; the original is unchanged"]
    pub fn apply(&self, dir: Direction) -> Result<Self, crate::Error> {
        self.try_apply(dir).ok_or_else(|| {
            let (row, col) = self.blank();
            crate::Error::IllegalMove {
                action: dir.to_string(),
                context: format!("blank at row {row}, col {col} is on the {dir} edge"),
            }
        })
    }

    /// Apply a sequence of moves in order.
    ///
    /// # Errors
    ///
    /// Fails on the first illegal move.
    pub fn apply_all(&self, moves: &[Direction]) -> Result<Self, crate::Error> {
        moves.iter().try_fold(*self, |grid, &dir| grid.apply(dir))
    }

    /// Moves applicable from this state, in [`Direction::ALL`] order.
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.try_apply(dir).is_some())
            .collect()
    }
}

impl<const N: usize> SearchState for Grid<N> {
    type Move = Direction;

    /// Successors in up, down, left, right order of the blank.
    fn neighbors(&self) -> Vec<(Direction, Self)> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.try_apply(dir).map(|next| (dir, next)))
            .collect()
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::solved()
    }
}

/// Split puzzle text into tile tokens.
pub(crate) fn tile_tokens(s: &str) -> Vec<&str> {
    s.split(|c: char| c.is_whitespace() || c == ',' || c == '/')
        .filter(|t| !t.is_empty())
        .collect()
}

impl<const N: usize> FromStr for Grid<N> {
    type Err = crate::Error;

    /// Parse tiles separated by whitespace, commas or `/`.
    ///
    /// The blank may be written `0`, `.` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tile_tokens(s);
        if tokens.len() != Self::CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: Self::CELLS,
                got: tokens.len(),
                context: s.to_string(),
            });
        }

        let mut tiles = [[BLANK; N]; N];
        for (slot, token) in tiles.iter_mut().flatten().zip(&tokens) {
            *slot = match *token {
                "." | "_" => BLANK,
                t => t.parse::<u8>().map_err(|_| crate::Error::InvalidTile {
                    token: t.to_string(),
                    width: N,
                })?,
            };
        }
        Self::new(tiles)
    }
}

impl<const N: usize> fmt::Display for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (Self::CELLS - 1).to_string().len();
        for (r, row) in self.tiles.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
