//! Choosing a move at the root of the game tree

use log::debug;
use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use super::{AdversarialGame, Decision, SearchEngine, Strategy};
use crate::{Error, Result, app::EngineConfig};

/// Largest number of open cells searched without a depth limit.
pub const UNGUARDED_MOVE_LIMIT: usize = 9;

/// Picks moves according to an [`EngineConfig`].
///
/// Owns the random generator used for the opening shortcut so a seeded
/// selector replays the same games.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    config: EngineConfig,
    rng: StdRng,
}

impl MoveSelector {
    pub fn new(config: EngineConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(random));
        Self { config, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose a move for `player` in `game`.
    ///
    /// On an untouched board with `random_opening` enabled the move is drawn
    /// uniformly from the legal moves and no search runs.
    ///
    /// # Errors
    ///
    /// [`Error::GameOver`] when either side has already won,
    /// [`Error::NoValidMoves`] on a full board, and
    /// [`Error::InvalidConfiguration`] for an unguarded oversized search.
    pub fn select<G: AdversarialGame>(
        &mut self,
        game: &mut G,
        player: G::Player,
        opponent: G::Player,
    ) -> Result<Decision<G::Move>> {
        if game.has_won(player) || game.has_won(opponent) {
            return Err(Error::GameOver);
        }
        let moves = game.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }

        if self.config.random_opening && game.is_untouched() {
            let &mv = moves.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
            debug!("random opening move {mv:?}");
            return Ok(Decision {
                mv,
                score: 0,
                nodes_visited: 0,
                random_opening: true,
            });
        }

        best_move(game, player, opponent, self.config.strategy, self.config.max_depth)
    }
}

/// Search every legal move for `player` and return the best one.
///
/// Each candidate is placed, then scored with `opponent` to move. The
/// strictly greatest score wins, so ties go to the earliest move in
/// [`AdversarialGame::legal_moves`] order. Every candidate gets a fresh
/// alpha-beta window, which keeps pruned scores equal to minimax scores.
///
/// # Errors
///
/// [`Error::GameOver`] when either side has already won,
/// [`Error::NoValidMoves`] when there is nothing to play, and
/// [`Error::InvalidConfiguration`] for a zero depth limit or when more than
/// [`UNGUARDED_MOVE_LIMIT`] moves are open without a depth limit.
pub fn best_move<G: AdversarialGame>(
    game: &mut G,
    player: G::Player,
    opponent: G::Player,
    strategy: Strategy,
    max_depth: Option<usize>,
) -> Result<Decision<G::Move>> {
    if game.has_won(player) || game.has_won(opponent) {
        return Err(Error::GameOver);
    }
    if max_depth == Some(0) {
        return Err(Error::InvalidConfiguration {
            message: "max_depth must be at least 1".to_string(),
        });
    }

    let moves = game.legal_moves();
    if moves.len() > UNGUARDED_MOVE_LIMIT && max_depth.is_none() {
        return Err(Error::InvalidConfiguration {
            message: format!(
                "{} open cells need a max depth (limit without one is {UNGUARDED_MOVE_LIMIT})",
                moves.len()
            ),
        });
    }

    let mut engine = SearchEngine::new(strategy, max_depth);
    let mut best: Option<(G::Move, i32)> = None;

    for mv in moves {
        game.place(mv, player);
        let score = engine.evaluate(game, player, opponent, false);
        game.undo(mv);

        debug!("{strategy}: {mv:?} scores {score}");
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((mv, score));
        }
    }

    let (mv, score) = best.ok_or(Error::NoValidMoves)?;
    debug!(
        "{strategy} chose {mv:?} (score {score}, {} nodes)",
        engine.nodes_visited()
    );
    Ok(Decision {
        mv,
        score,
        nodes_visited: engine.nodes_visited(),
        random_opening: false,
    })
}
