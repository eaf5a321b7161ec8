//! Core data structures for the Gridloom sudoku solver.
//!
//! This crate provides the board data model the search in `gridloom-solver`
//! operates on. The central type is [`Board`], an immutable 9×9 grid of
//! optional digits: every structural update returns a new board value and
//! leaves the original untouched.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`position`]: Cell coordinates, column and row each in 0-8
//! - [`house`]: Constraint regions (rows, columns, and 3×3 blocks)
//! - [`board`]: The immutable board and its queries and structural updates
//!
//! # Examples
//!
//! ```
//! use gridloom_core::{Board, Digit, Position};
//!
//! let board = Board::empty();
//! let pos = Position::new(4, 4);
//!
//! // Every digit is a legal candidate for an empty board
//! assert!(board.is_valid_value(pos, Digit::Five));
//!
//! // Placing a digit produces a new board; the original is unchanged
//! let placed = board.with_digit(pos, Digit::Five);
//! assert!(board.is_empty(pos));
//! assert_eq!(placed.get(pos), Some(Digit::Five));
//!
//! // The placed digit now blocks its row, column, and block
//! assert!(!placed.is_valid_value(Position::new(4, 7), Digit::Five));
//! ```

pub mod board;
pub mod digit;
pub mod house;
pub mod position;

pub use self::{
    board::{Board, BoardError},
    digit::Digit,
    house::House,
    position::Position,
};
