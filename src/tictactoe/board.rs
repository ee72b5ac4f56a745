//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};
use crate::adversarial::AdversarialGame;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayer {
                player: other.to_string(),
            }),
        }
    }
}

/// A cell coordinate, zero-based.
///
/// Displays as `(row, col)`; [`Position::label`] gives the one-based cell
/// number players type (1 is the top-left cell, numbered row by row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One-based cell number on a board of the given width.
    pub fn label(self, width: usize) -> usize {
        self.row * width + self.col + 1
    }

    /// Inverse of [`Position::label`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] outside `1..=width²`.
    pub fn from_label(label: usize, width: usize) -> Result<Self, crate::Error> {
        let max = width * width;
        if label == 0 || label > max {
            return Err(crate::Error::InvalidPosition {
                position: label,
                max,
            });
        }
        let index = label - 1;
        Ok(Self::new(index / width, index % width))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy`: it is an `N`x`N` array of one-byte cells
/// plus the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    pub cells: [[Cell; N]; N],
    pub to_move: Player,
}

/// Standard 3x3 tic-tac-toe.
pub type TicTacToe = Board<3>;

impl<const N: usize> Board<N> {
    /// Number of cells on the board.
    pub const CELLS: usize = N * N;

    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    pub fn new_with_player(first_player: Player) -> Self {
        Board {
            cells: [[Cell::Empty; N]; N],
            to_move: first_player,
        }
    }

    /// Build a board from rows of one-character strings such as
    /// `[" ", "X", "O"]`. The player to move is inferred from the piece
    /// counts (X moves first).
    ///
    /// # Errors
    ///
    /// Returns error on unknown cell strings or impossible piece counts.
    pub fn from_rows(rows: [[&str; N]; N]) -> Result<Self, crate::Error> {
        let context = format!("{rows:?}");
        let mut cells = [[Cell::Empty; N]; N];
        for (r, row) in rows.iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                let mut chars = text.chars();
                let parsed = match (chars.next(), chars.next()) {
                    (None, _) => Some(Cell::Empty),
                    (Some(ch), None) => Cell::from_char(ch),
                    _ => None,
                };
                cells[r][c] = parsed.ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: text.chars().next().unwrap_or(' '),
                    position: r * N + c,
                    context: context.clone(),
                })?;
            }
        }
        let to_move = Self::infer_turn(&cells)?;
        Ok(Board { cells, to_move })
    }

    /// Create a board from a string representation.
    ///
    /// The string holds `N*N` cell characters (`.` or `-` for empty,
    /// whitespace ignored) and may end with `_X` or `_O` to set the player
    /// to move explicitly. Without the suffix the player is inferred from
    /// the piece counts.
    ///
    /// # Errors
    ///
    /// Returns error on a wrong cell count, unknown characters, an unknown
    /// suffix, or impossible piece counts.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, suffix) = match cleaned.split_once('_') {
            Some((board, player)) => (board, Some(player.parse::<Player>()?)),
            None => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        if chars.len() != Self::CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: Self::CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; N]; N];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / N][i % N] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let to_move = match suffix {
            Some(player) => player,
            None => Self::infer_turn(&cells)?,
        };
        Ok(Board { cells, to_move })
    }

    fn infer_turn(cells: &[[Cell; N]; N]) -> Result<Player, crate::Error> {
        let x = cells.iter().flatten().filter(|&&c| c == Cell::X).count();
        let o = cells.iter().flatten().filter(|&&c| c == Cell::O).count();
        if x == o {
            Ok(Player::X)
        } else if x == o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidConfiguration {
                message: format!("piece counts X={x}, O={o} cannot arise with X moving first"),
            })
        }
    }

    /// Get cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        (0..N)
            .flat_map(|row| (0..N).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c != Cell::Empty)
            .count()
    }

    /// Make a move for the player to move and return a new board state
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] off the board,
    /// [`crate::Error::GameOver`] on a finished game, and
    /// [`crate::Error::IllegalMove`] on an occupied cell.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: Position) -> Result<Board<N>, crate::Error> {
        if pos.row >= N || pos.col >= N {
            return Err(crate::Error::InvalidPosition {
                position: pos.row * N + pos.col + 1,
                max: Self::CELLS,
            });
        }
        if self.is_terminal() {
            return Err(crate::Error::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::IllegalMove {
                action: format!("{} at {}", self.to_move, pos.label(N)),
                context: format!("position {pos} is already occupied"),
            });
        }

        let mut new_state = *self;
        new_state.cells[pos.row][pos.col] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Legal moves in this position (empty cells when the game is not over)
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Check if a player has a full line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.iter().flatten().any(|&c| c == Cell::Empty)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.outcome() == Some(GameOutcome::Draw)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Outcome of the game, or `None` while it is still in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Win(player)),
            None if self.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Compact encoding: cells row by row, then `_` and the player to move
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells
                .iter()
                .flatten()
                .map(|&c| c.to_char())
                .collect::<String>(),
            self.to_move
        )
    }
}

impl<const N: usize> AdversarialGame for Board<N> {
    type Move = Position;
    type Player = Player;

    fn legal_moves(&self) -> Vec<Position> {
        self.empty_positions()
    }

    fn place(&mut self, mv: Position, player: Player) {
        self.cells[mv.row][mv.col] = player.to_cell();
    }

    fn undo(&mut self, mv: Position) {
        self.cells[mv.row][mv.col] = Cell::Empty;
    }

    fn has_won(&self, player: Player) -> bool {
        Board::has_won(self, player)
    }

    /// `N² + 1`: larger than any depth, so `win_score - depth` stays positive.
    fn win_score(&self) -> i32 {
        (Self::CELLS + 1) as i32
    }

    fn is_untouched(&self) -> bool {
        self.occupied_count() == 0
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FromStr for Board<N> {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
