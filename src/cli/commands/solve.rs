//! Solve command - shortest move sequence for a sliding-tile puzzle

use anyhow::Result;
use clap::Parser;

use super::puzzle_width;
use crate::{
    cli::{
        config::CommonConfig,
        output::{format_number, print_block, print_kv, print_section},
    },
    puzzle::{self, Algorithm, Direction, Grid, is_solvable},
    search::Solution,
};

#[derive(Parser, Debug)]
#[command(about = "Solve a sliding-tile puzzle")]
pub struct SolveArgs {
    /// Start grid, rows separated by '/' (e.g. "1 2 3 / 4 0 6 / 7 5 8")
    #[arg(long)]
    pub start: String,

    /// Goal grid; defaults to the solved grid of the same size
    #[arg(long)]
    pub goal: Option<String>,

    /// Search algorithm
    #[arg(long, short = 'a', value_enum, default_value_t = Algorithm::AstarManhattan)]
    pub algorithm: Algorithm,

    /// Run every algorithm and compare them
    #[arg(long, conflicts_with = "algorithm")]
    pub all: bool,
}

pub fn execute(args: SolveArgs, _common: &CommonConfig) -> Result<()> {
    match puzzle_width(&args.start)? {
        3 => run::<3>(&args),
        _ => run::<4>(&args),
    }
}

fn run<const N: usize>(args: &SolveArgs) -> Result<()> {
    let start: Grid<N> = args.start.parse()?;
    let goal: Grid<N> = match &args.goal {
        Some(text) => text.parse()?,
        None => Grid::solved(),
    };

    print_section(&format!("{N}x{N} puzzle"));
    println!("  Start:");
    print_block(&start.to_string());
    println!("  Goal:");
    print_block(&goal.to_string());
    print_kv("Solvable", if is_solvable(&start, &goal) { "yes" } else { "no" });

    let results = if args.all {
        puzzle::solve_all(&start, &goal)?
    } else {
        vec![(args.algorithm, puzzle::solve(&start, &goal, args.algorithm)?)]
    };

    for (algorithm, solution) in &results {
        print_solution(*algorithm, solution);
    }
    Ok(())
}

fn print_solution(algorithm: Algorithm, solution: &Solution<Direction>) {
    println!();
    println!("{}", algorithm.label());
    print_kv("Moves", &solution.len().to_string());
    print_kv("Expanded", &format_number(solution.expanded as u64));
    let path: Vec<&str> = solution.moves.iter().map(|d| d.as_str()).collect();
    print_kv("Sequence", &path.join(" "));
}
