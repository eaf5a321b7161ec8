//! Gridloom command-line entry point.
//!
//! Solves a fixed sample puzzle and prints the grid before and after.

use gridloom_core::{Board, BoardError};

/// The sample puzzle, with 0 encoding an empty cell.
const PUZZLE: [[u8; 9]; 9] = [
    [0, 6, 4, 3, 5, 0, 2, 0, 1],
    [3, 0, 0, 2, 0, 0, 6, 0, 0],
    [0, 9, 7, 1, 0, 4, 3, 5, 0],
    [1, 3, 2, 4, 0, 0, 9, 6, 0],
    [0, 0, 9, 0, 1, 0, 8, 2, 4],
    [4, 8, 6, 9, 0, 0, 0, 3, 0],
    [7, 0, 0, 0, 0, 6, 0, 1, 3],
    [0, 0, 3, 8, 4, 0, 7, 9, 2],
    [9, 4, 1, 7, 0, 0, 0, 8, 0],
];

fn main() -> Result<(), BoardError> {
    better_panic::install();
    env_logger::init();

    let puzzle = Board::from_rows(&PUZZLE)?;
    println!("{puzzle}");

    match gridloom_solver::solve_one(&puzzle) {
        Some(solution) => {
            log::info!("sample puzzle solved");
            println!("{solution}");
        }
        None => println!("no solution"),
    }
    Ok(())
}
