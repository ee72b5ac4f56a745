//! Compare command - minimax vs alpha-beta on one position

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use super::board_width;
use crate::{
    adversarial::{Decision, StrategyComparison, compare_strategies},
    cli::{
        config::CommonConfig,
        output::{create_spinner, format_number, print_kv, print_section, print_subsection},
    },
    tictactoe::{Board, Player, Position},
};

#[derive(Parser, Debug)]
#[command(about = "Compare minimax and alpha-beta node counts")]
pub struct CompareArgs {
    /// Board cells row by row ('.' empty), optionally ending in _X or _O
    #[arg(long)]
    pub board: String,

    /// Player to search for; defaults to the player to move
    #[arg(long)]
    pub player: Option<Player>,

    /// Depth limit (required for boards larger than 3x3)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Export the comparison as JSON
    #[arg(long, short = 'o')]
    pub export: Option<PathBuf>,
}

pub fn execute(args: CompareArgs, _common: &CommonConfig) -> Result<()> {
    match board_width(&args.board)? {
        3 => run::<3>(&args),
        _ => run::<4>(&args),
    }
}

fn run<const N: usize>(args: &CompareArgs) -> Result<()> {
    let mut board: Board<N> = args.board.parse()?;
    let player = args.player.unwrap_or(board.to_move);

    let spinner = create_spinner("Searching with minimax and alpha-beta...");
    let comparison = compare_strategies(&mut board, player, player.opponent(), args.max_depth);
    spinner.finish_and_clear();
    let comparison = comparison?;

    print_section(&format!("Strategy comparison for {player}"));
    print_decision::<N>("Minimax", &comparison.minimax);
    print_decision::<N>("Alpha-beta", &comparison.alpha_beta);

    print_subsection("Summary");
    print_kv("Same decision", if comparison.agree() { "yes" } else { "no" });
    print_kv("Node reduction", &format!("{:.1}%", comparison.node_reduction));

    if let Some(path) = &args.export {
        export_json(&comparison, path)?;
        println!("\nResults exported to: {}", path.display());
    }
    Ok(())
}

fn print_decision<const N: usize>(title: &str, decision: &Decision<Position>) {
    print_subsection(title);
    print_kv("Move", &format!("cell {} {}", decision.mv.label(N), decision.mv));
    print_kv("Score", &decision.score.to_string());
    print_kv("Nodes visited", &format_number(decision.nodes_visited));
}

fn export_json(comparison: &StrategyComparison<Position>, path: &PathBuf) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), comparison)?;
    Ok(())
}
