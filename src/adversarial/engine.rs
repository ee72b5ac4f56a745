//! Recursive minimax / alpha-beta evaluation

use log::trace;

use super::{AdversarialGame, Strategy};

/// Scores positions by searching the game tree below them.
///
/// Counts every node it enters; [`SearchEngine::nodes_visited`] is
/// cumulative across [`SearchEngine::evaluate`] calls until
/// [`SearchEngine::reset`].
#[derive(Debug, Clone)]
pub struct SearchEngine {
    strategy: Strategy,
    max_depth: Option<usize>,
    nodes: u64,
}

impl SearchEngine {
    pub fn new(strategy: Strategy, max_depth: Option<usize>) -> Self {
        Self {
            strategy,
            max_depth,
            nodes: 0,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    /// Score `game` for `player`, with `maximizing` telling whose turn it
    /// is (`true` when `player` moves next). Depth starts at 0.
    ///
    /// The board is restored before returning.
    pub fn evaluate<G: AdversarialGame>(
        &mut self,
        game: &mut G,
        player: G::Player,
        opponent: G::Player,
        maximizing: bool,
    ) -> i32 {
        self.search(game, player, opponent, 0, maximizing, i32::MIN, i32::MAX)
    }

    #[allow(clippy::too_many_arguments)]
    fn search<G: AdversarialGame>(
        &mut self,
        game: &mut G,
        player: G::Player,
        opponent: G::Player,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        let win = game.win_score();
        let ply = depth as i32;
        if game.has_won(player) {
            return win - ply;
        }
        if game.has_won(opponent) {
            return ply - win;
        }
        let moves = game.legal_moves();
        if moves.is_empty() {
            return 0;
        }
        if self.max_depth.is_some_and(|limit| depth >= limit) {
            return 0;
        }

        let prune = self.strategy.prunes();
        let mover = if maximizing { player } else { opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for (i, &mv) in moves.iter().enumerate() {
            game.place(mv, mover);
            let score = self.search(game, player, opponent, depth + 1, !maximizing, alpha, beta);
            game.undo(mv);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if prune && beta <= alpha {
                trace!(
                    "cutoff at depth {depth} after {}/{} moves (alpha {alpha}, beta {beta})",
                    i + 1,
                    moves.len()
                );
                break;
            }
        }
        best
    }
}
