//! Computer player backed by the adversarial search

use crate::{
    Result,
    adversarial::{Decision, MoveSelector},
    app::EngineConfig,
    ports::{Command, MoveSource},
    tictactoe::{Board, Position},
};

/// Plays whichever side is to move, using a [`MoveSelector`].
#[derive(Debug, Clone)]
pub struct SearchPlayer {
    name: String,
    selector: MoveSelector,
    last_decision: Option<Decision<Position>>,
}

impl SearchPlayer {
    pub fn new(name: impl Into<String>, config: EngineConfig) -> Self {
        Self {
            name: name.into(),
            selector: MoveSelector::new(config),
            last_decision: None,
        }
    }

    /// The decision behind the most recent move, if any.
    pub fn last_decision(&self) -> Option<&Decision<Position>> {
        self.last_decision.as_ref()
    }
}

impl<const N: usize> MoveSource<Board<N>, Position> for SearchPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_command(&mut self, state: &Board<N>) -> Result<Command<Position>> {
        let mut scratch = *state;
        let player = state.to_move;
        let decision = self.selector.select(&mut scratch, player, player.opponent())?;
        self.last_decision = Some(decision);
        Ok(Command::Play(decision.mv))
    }
}
