//! Best-move command - pick a tic-tac-toe move by game-tree search

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::board_width;
use crate::{
    adversarial::{MoveSelector, Strategy},
    app::EngineConfig,
    cli::{
        config::CommonConfig,
        output::{format_number, print_block, print_kv, print_section},
    },
    tictactoe::{Board, LineAnalyzer, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Choose the best move for a tic-tac-toe position")]
pub struct BestMoveArgs {
    /// Board cells row by row ('.' empty), optionally ending in _X or _O
    #[arg(long)]
    pub board: String,

    /// Player to search for; defaults to the player to move
    #[arg(long)]
    pub player: Option<Player>,

    /// Search strategy (overrides the config file)
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Depth limit (required for boards larger than 3x3)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Always search, even on an empty board
    #[arg(long)]
    pub no_random_opening: bool,

    /// Engine configuration JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl BestMoveArgs {
    /// Engine configuration from the optional file with flags applied on top.
    pub fn engine_config(&self, common: &CommonConfig) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_json_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        if let Some(depth) = self.max_depth {
            config = config.with_max_depth(depth);
        }
        if self.no_random_opening {
            config = config.with_random_opening(false);
        }
        if let Some(seed) = common.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: BestMoveArgs, common: &CommonConfig) -> Result<()> {
    let config = args.engine_config(common)?;
    match board_width(&args.board)? {
        3 => run::<3>(&args, config),
        _ => run::<4>(&args, config),
    }
}

fn run<const N: usize>(args: &BestMoveArgs, config: EngineConfig) -> Result<()> {
    let mut board: Board<N> = args.board.parse()?;
    let player = args.player.unwrap_or(board.to_move);
    let strategy = config.strategy;

    print_section(&format!("Best move for {player} ({strategy})"));
    print_block(&board.to_string());

    let threats = LineAnalyzer::winning_moves(&board.cells, player.opponent());
    if !threats.is_empty() {
        let labels: Vec<String> = threats.iter().map(|p| p.label(N).to_string()).collect();
        print_kv("Opponent threats", &labels.join(", "));
    }

    let mut selector = MoveSelector::new(config);
    let decision = selector.select(&mut board, player, player.opponent())?;

    print_kv(
        "Move",
        &format!("cell {} {}", decision.mv.label(N), decision.mv),
    );
    print_kv("Score", &decision.score.to_string());
    print_kv("Nodes visited", &format_number(decision.nodes_visited));
    if decision.random_opening {
        print_kv("Note", "random opening, no search");
    }
    Ok(())
}
