//! Backtracking search over immutable sudoku boards.
//!
//! The search explores the space of cell assignments depth-first: it scans
//! the board in row-major order for the first empty cell, tries each digit
//! 1-9 in ascending order, and recurses on a derived board for every
//! candidate that passes [`Board::is_valid_value`]. Because each branch owns
//! its own board, backtracking is just returning from the recursive call;
//! nothing is ever undone in place.
//!
//! [`Board::is_valid_value`]: gridloom_core::Board::is_valid_value
//!
//! # Examples
//!
//! ```
//! use gridloom_core::Board;
//!
//! let puzzle: Board = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let solution = gridloom_solver::solve_one(&puzzle).expect("puzzle is solvable");
//! assert!(solution.is_solved());
//! assert!(solution.is_consistent());
//! # Ok::<(), gridloom_core::BoardError>(())
//! ```

pub use self::backtrack::{solve_all, solve_one, solve_up_to};

pub mod backtrack;

#[cfg(test)]
mod testing;
