//! CLI subcommands

pub mod best_move;
pub mod compare;
pub mod play;
pub mod solve;

use anyhow::{Result, bail};

use crate::puzzle::grid::tile_tokens;

/// Side length of a puzzle written as tile tokens.
pub(crate) fn puzzle_width(text: &str) -> Result<usize> {
    match tile_tokens(text).len() {
        9 => Ok(3),
        16 => Ok(4),
        n => bail!("puzzle '{text}' has {n} tiles; expected 9 (3x3) or 16 (4x4)"),
    }
}

/// Side length of a tic-tac-toe board string, ignoring whitespace and any
/// `_X`/`_O` suffix.
pub(crate) fn board_width(text: &str) -> Result<usize> {
    let cells = text
        .split('_')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .count();
    match cells {
        9 => Ok(3),
        16 => Ok(4),
        n => bail!("board '{text}' has {n} cells; expected 9 (3x3) or 16 (4x4)"),
    }
}
