//! High-level game management

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::board::{Board, Player, Position};
use crate::{
    Result,
    ports::{Command, MoveSource},
};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub position: Position,
    pub player: Player,
}

/// A finished or abandoned match between two move sources.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    /// Source names, X first
    pub players: [String; 2],
    pub moves: Vec<PlayedMove>,
    /// `None` when a source quit before the game ended
    pub outcome: Option<GameOutcome>,
    /// Board encoding (see [`Board::encode`]) after the last move
    pub final_board: String,
}

impl MatchRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Win(player)) => Some(player),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Play `initial` to the end, asking `x` and `o` for moves in turn.
///
/// A source proposing an occupied or off-board cell aborts the match with
/// the board error; the board itself never enters an illegal state.
///
/// # Errors
///
/// Propagates source failures and illegal proposals.
pub fn play_match<const N: usize>(
    initial: Board<N>,
    x: &mut dyn MoveSource<Board<N>, Position>,
    o: &mut dyn MoveSource<Board<N>, Position>,
) -> Result<MatchRecord> {
    let players = [x.name().to_string(), o.name().to_string()];
    let mut board = initial;
    let mut moves = Vec::new();

    while board.outcome().is_none() {
        let mover = board.to_move;
        let source: &mut dyn MoveSource<Board<N>, Position> = match mover {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let position = match source.next_command(&board)? {
            Command::Play(position) => position,
            Command::Quit => {
                info!("{} ({mover}) quit after {} moves", source.name(), moves.len());
                break;
            }
        };

        board = board.make_move(position)?;
        debug!("{mover} plays {position}\n{board}");
        moves.push(PlayedMove {
            position,
            player: mover,
        });
    }

    let outcome = board.outcome();
    if let Some(result) = outcome {
        info!("match {} vs {} ended: {result:?}", players[0], players[1]);
    }

    Ok(MatchRecord {
        players,
        moves,
        outcome,
        final_board: board.encode(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ports::ScriptedSource, tictactoe::TicTacToe};

    fn script(name: &str, labels: &[usize]) -> ScriptedSource<Position> {
        ScriptedSource::from_moves(
            name,
            labels.iter().map(|&l| Position::from_label(l, 3).unwrap()),
        )
    }

    #[test]
    fn scripted_match_records_winner() {
        let mut x = script("x", &[1, 2, 3]);
        let mut o = script("o", &[4, 5]);

        let record = play_match(TicTacToe::new(), &mut x, &mut o).unwrap();
        assert_eq!(record.winner(), Some(Player::X));
        assert_eq!(record.moves.len(), 5);
        assert_eq!(record.players, ["x".to_string(), "o".to_string()]);
        assert_eq!(record.final_board, "XXXOO...._O");
    }

    #[test]
    fn quitting_leaves_match_incomplete() {
        let mut x = script("x", &[5]);
        let mut o = script("o", &[]);

        let record = play_match(TicTacToe::new(), &mut x, &mut o).unwrap();
        assert!(!record.is_complete());
        assert_eq!(record.moves.len(), 1);
    }

    #[test]
    fn occupied_cell_aborts_match() {
        let mut x = script("x", &[5]);
        let mut o = script("o", &[5]);

        let result = play_match(TicTacToe::new(), &mut x, &mut o);
        assert!(matches!(result, Err(crate::Error::IllegalMove { .. })));
    }

    #[test]
    fn finished_board_plays_no_moves() {
        let board = TicTacToe::from_string("XXXOO....").unwrap();
        let mut x = script("x", &[9]);
        let mut o = script("o", &[9]);

        let record = play_match(board, &mut x, &mut o).unwrap();
        assert!(record.moves.is_empty());
        assert_eq!(record.winner(), Some(Player::X));
    }
}
