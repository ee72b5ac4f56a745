//! Play command - computer vs computer through the game loop

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::SearchPlayer,
    adversarial::Strategy,
    app::EngineConfig,
    cli::{
        config::CommonConfig,
        output::{print_block, print_kv, print_section},
    },
    tictactoe::{Board, GameOutcome, MatchRecord, TicTacToe, play_match},
};

#[derive(Parser, Debug)]
#[command(about = "Play a tic-tac-toe game between two search engines")]
pub struct PlayArgs {
    /// Strategy for X
    #[arg(long, value_enum, default_value_t = Strategy::AlphaBeta)]
    pub x_strategy: Strategy,

    /// Strategy for O
    #[arg(long, value_enum, default_value_t = Strategy::AlphaBeta)]
    pub o_strategy: Strategy,
}

pub fn execute(args: PlayArgs, common: &CommonConfig) -> Result<()> {
    let record = play(&args, common)?;

    print_section("Game record");
    for (i, played) in record.moves.iter().enumerate() {
        println!("  {:2}. {} -> cell {}", i + 1, played.player, played.position.label(3));
    }
    let board: TicTacToe = Board::from_string(&record.final_board)?;
    println!();
    print_block(&board.to_string());
    let result = match record.outcome {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "draw".to_string(),
        None => "unfinished".to_string(),
    };
    print_kv("Result", &result);
    Ok(())
}

/// Run the match described by `args`.
pub fn play(args: &PlayArgs, common: &CommonConfig) -> Result<MatchRecord> {
    let config_for = |strategy: Strategy, offset: u64| {
        let config = EngineConfig::new(strategy);
        match common.seed {
            Some(seed) => config.with_seed(seed.wrapping_add(offset)),
            None => config,
        }
    };

    let mut x = SearchPlayer::new(
        format!("X ({})", args.x_strategy),
        config_for(args.x_strategy, 0),
    );
    let mut o = SearchPlayer::new(
        format!("O ({})", args.o_strategy),
        config_for(args.o_strategy, 1),
    );
    Ok(play_match(TicTacToe::new(), &mut x, &mut o)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_games_repeat_and_draw() {
        let args = PlayArgs {
            x_strategy: Strategy::Minimax,
            o_strategy: Strategy::AlphaBeta,
        };
        let common = CommonConfig {
            seed: Some(11),
            verbose: false,
        };

        let first = play(&args, &common).unwrap();
        let second = play(&args, &common).unwrap();
        assert_eq!(first.moves, second.moves);
        assert_eq!(first.outcome, Some(GameOutcome::Draw));
    }
}
