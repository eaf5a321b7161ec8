//! Example demonstrating the backtracking solver on built-in puzzles.
//!
//! # Usage
//!
//! Solve the classic easy puzzle and print the first solution found:
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Pick a different built-in puzzle:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --puzzle two-solution
//! ```
//!
//! Enumerate every solution instead of stopping at the first:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --puzzle two-solution --all
//! ```
//!
//! Bound the enumeration (useful for under-constrained grids like `empty`):
//!
//! ```sh
//! cargo run --example solve_puzzle -- --puzzle empty --limit 3
//! ```

use clap::{Parser, ValueEnum};
use gridloom_core::Board;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Puzzle {
    /// The classic easy puzzle with a unique solution.
    Easy,
    /// A grid whose solution set has exactly two members.
    TwoSolution,
    /// The fully empty grid.
    Empty,
}

impl Puzzle {
    fn board(self) -> Board {
        let grid = match self {
            Self::Easy => {
                "
                53_ _7_ ___
                6__ 195 ___
                _98 ___ _6_
                8__ _6_ __3
                4__ 8_3 __1
                7__ _2_ __6
                _6_ ___ 28_
                ___ 419 __5
                ___ _8_ _79
                "
            }
            Self::TwoSolution => {
                "
                534 678 912
                672 195 348
                198 342 567
                859 76_ 42_
                426 85_ 79_
                713 924 856
                961 537 284
                287 419 635
                345 286 179
                "
            }
            Self::Empty => return Board::empty(),
        };
        grid.parse().expect("built-in grid must parse")
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Built-in puzzle to solve.
    #[arg(long, value_name = "PUZZLE", default_value = "easy")]
    puzzle: Puzzle,

    /// Enumerate every solution instead of stopping at the first.
    #[arg(long, conflicts_with = "limit")]
    all: bool,

    /// Enumerate at most this many solutions.
    #[arg(long, value_name = "COUNT")]
    limit: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let puzzle = args.puzzle.board();

    println!("puzzle:");
    println!("{puzzle}");

    if args.all || args.limit.is_some() {
        let solutions = match args.limit {
            Some(limit) => gridloom_solver::solve_up_to(&puzzle, limit),
            None => gridloom_solver::solve_all(&puzzle),
        };
        println!("{} solution(s) found", solutions.len());
        for (i, solution) in solutions.iter().enumerate() {
            println!();
            println!("solution {}:", i + 1);
            println!("{solution}");
        }
    } else {
        match gridloom_solver::solve_one(&puzzle) {
            Some(solution) => {
                println!("solution:");
                println!("{solution}");
            }
            None => println!("no solution"),
        }
    }
}
