//! Node-count instrumentation for comparing search strategies

use serde::Serialize;

use super::{AdversarialGame, Decision, Strategy, selector::best_move};
use crate::Result;

/// Both strategies run on the same position.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyComparison<M> {
    pub minimax: Decision<M>,
    pub alpha_beta: Decision<M>,
    /// Share of minimax nodes skipped by pruning, in percent
    pub node_reduction: f64,
}

impl<M: PartialEq> StrategyComparison<M> {
    /// Both strategies chose the same move with the same score.
    pub fn agree(&self) -> bool {
        self.minimax.mv == self.alpha_beta.mv && self.minimax.score == self.alpha_beta.score
    }
}

/// Run minimax and alpha-beta on `game` for `player`.
///
/// The random opening shortcut is never taken here.
///
/// # Errors
///
/// Same as [`best_move`].
pub fn compare_strategies<G: AdversarialGame>(
    game: &mut G,
    player: G::Player,
    opponent: G::Player,
    max_depth: Option<usize>,
) -> Result<StrategyComparison<G::Move>> {
    let minimax = best_move(game, player, opponent, Strategy::Minimax, max_depth)?;
    let alpha_beta = best_move(game, player, opponent, Strategy::AlphaBeta, max_depth)?;

    let node_reduction = if minimax.nodes_visited == 0 {
        0.0
    } else {
        let skipped = minimax.nodes_visited.saturating_sub(alpha_beta.nodes_visited);
        skipped as f64 * 100.0 / minimax.nodes_visited as f64
    };

    Ok(StrategyComparison {
        minimax,
        alpha_beta,
        node_reduction,
    })
}

/// Nodes one strategy visits when choosing a move for `player`.
///
/// # Errors
///
/// Same as [`best_move`].
pub fn count_nodes<G: AdversarialGame>(
    game: &mut G,
    player: G::Player,
    opponent: G::Player,
    strategy: Strategy,
) -> Result<u64> {
    Ok(best_move(game, player, opponent, strategy, None)?.nodes_visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        tictactoe::{Player, TicTacToe},
    };

    #[test]
    fn comparison_reports_agreement_and_savings() {
        let mut game = TicTacToe::from_string(".XOXO....").unwrap();
        let comparison = compare_strategies(&mut game, Player::X, Player::O, None).unwrap();

        assert!(comparison.agree());
        assert!(comparison.alpha_beta.nodes_visited < comparison.minimax.nodes_visited);
        assert!(comparison.node_reduction > 0.0 && comparison.node_reduction < 100.0);
    }

    #[test]
    fn count_nodes_matches_decision() {
        let mut game = TicTacToe::from_string("XOXXOOOX.").unwrap();
        // One open cell: the root child is a terminal draw
        assert_eq!(count_nodes(&mut game, Player::X, Player::O, Strategy::Minimax).unwrap(), 1);
    }

    #[test]
    fn finished_games_are_not_compared() {
        let mut game = TicTacToe::from_string("XXXOO....").unwrap();
        assert!(matches!(
            compare_strategies(&mut game, Player::O, Player::X, None),
            Err(Error::GameOver)
        ));
        assert!(matches!(
            count_nodes(&mut game, Player::O, Player::X, Strategy::Minimax),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn comparison_serializes_with_move_field() {
        let mut game = TicTacToe::from_string("XX.OO....").unwrap();
        let comparison = compare_strategies(&mut game, Player::X, Player::O, None).unwrap();
        let json = serde_json::to_value(&comparison).unwrap();
        assert_eq!(json["minimax"]["move"]["col"], 2);
        assert_eq!(json["alpha_beta"]["score"], 10);
    }
}
