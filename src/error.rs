//! Error types for the gamesearch crate

use thiserror::Error;

/// Main error type for the gamesearch crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(
        "puzzle is unsolvable: start parity {start_parity} does not match goal parity {goal_parity}"
    )]
    Unsolvable {
        start_parity: usize,
        goal_parity: usize,
    },

    #[error("search exhausted its frontier after expanding {expanded} states without reaching the goal")]
    NoSolutionFound { expanded: usize },

    #[error("illegal move '{action}': {context}")]
    IllegalMove { action: String, context: String },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string has wrong size: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("tile '{token}' is not a valid tile for a {width}x{width} puzzle")]
    InvalidTile { token: String, width: usize },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },

    #[error("puzzle has no blank tile (0)")]
    MissingBlank,

    #[error("position {position} is out of bounds (must be 1-{max})")]
    InvalidPosition { position: usize, max: usize },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayer { player: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
