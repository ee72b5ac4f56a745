//! gamesearch CLI - sliding-tile puzzle solvers and tic-tac-toe game-tree search
//!
//! This CLI provides a unified interface for:
//! - Solving 8- and 15-puzzles with BFS or A*
//! - Choosing tic-tac-toe moves with minimax or alpha-beta
//! - Comparing node counts between the two adversarial strategies
//! - Playing engine-vs-engine games

use anyhow::Result;
use clap::{Parser, Subcommand};
use gamesearch::cli::{commands, config::CommonConfig};

#[derive(Parser)]
#[command(name = "gamesearch")]
#[command(version, about = "Search algorithms for puzzles and two-player games", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a sliding-tile puzzle
    Solve(commands::solve::SolveArgs),

    /// Choose the best move for a tic-tac-toe position
    BestMove(commands::best_move::BestMoveArgs),

    /// Compare minimax and alpha-beta on one position
    Compare(commands::compare::CompareArgs),

    /// Play an engine-vs-engine game
    Play(commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.common.log_filter()),
    )
    .init();

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(args, &cli.common),
        Commands::BestMove(args) => commands::best_move::execute(args, &cli.common),
        Commands::Compare(args) => commands::compare::execute(args, &cli.common),
        Commands::Play(args) => commands::play::execute(args, &cli.common),
    }
}
