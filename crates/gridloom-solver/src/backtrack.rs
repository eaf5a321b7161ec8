//! Depth-first backtracking search.

use gridloom_core::{Board, Digit, Position};

/// Returns the first solution found for `board`, or `None` if it has no
/// completion.
///
/// The search is deterministic: cells are visited in row-major order and
/// candidates in ascending digit order, so the same input always yields the
/// same solution. A board with no empty cells is returned unchanged as its
/// own solution.
///
/// A contradictory starting board (a digit already repeated within a house)
/// is not rejected up front; the contradiction simply leaves some branch
/// without a legal candidate, and the search exhausts to `None`.
///
/// # Examples
///
/// ```
/// use gridloom_core::Board;
///
/// let solution = gridloom_solver::solve_one(&Board::empty()).expect("solvable");
/// assert!(solution.is_solved());
/// assert!(solution.is_consistent());
/// ```
#[must_use]
pub fn solve_one(board: &Board) -> Option<Board> {
    log::debug!("searching for one solution, {} empty cells", count_empty(board));
    let solution = first_solution(board);
    log::debug!("search finished, solution found: {}", solution.is_some());
    solution
}

/// Returns every completion of `board`, in the order the depth-first search
/// discovers them.
///
/// Sibling branches at one recursion level differ only in the digit assigned
/// to that level's empty cell, never in which cell is branched on, so the
/// enumeration is exhaustive and deterministic. A board with no empty cells
/// yields itself as the single element; an unsolvable board yields an empty
/// vector.
///
/// For under-constrained boards the solution set can be astronomically
/// large; use [`solve_up_to`] to bound the enumeration.
#[must_use]
pub fn solve_all(board: &Board) -> Vec<Board> {
    solve_up_to(board, usize::MAX)
}

/// Returns up to `limit` completions of `board`.
///
/// The limit is checked cooperatively at each candidate assignment, so the
/// search stops promptly once enough solutions are collected. The boards
/// returned are a prefix of what [`solve_all`] would return.
///
/// # Examples
///
/// ```
/// use gridloom_core::Board;
///
/// // The fully empty grid has a huge number of completions; two are enough
/// // to demonstrate the solution is not unique.
/// let solutions = gridloom_solver::solve_up_to(&Board::empty(), 2);
/// assert_eq!(solutions.len(), 2);
/// ```
#[must_use]
pub fn solve_up_to(board: &Board, limit: usize) -> Vec<Board> {
    log::debug!(
        "enumerating up to {limit} solutions, {} empty cells",
        count_empty(board)
    );
    let mut solutions = Vec::new();
    collect_solutions(board, limit, &mut solutions);
    log::debug!("search finished, {} solution(s) found", solutions.len());
    solutions
}

fn first_solution(board: &Board) -> Option<Board> {
    let Some(pos) = first_empty(board) else {
        return Some(board.clone());
    };
    Digit::ALL
        .into_iter()
        .filter(|&digit| board.is_valid_value(pos, digit))
        .find_map(|digit| first_solution(&board.with_digit(pos, digit)))
}

fn collect_solutions(board: &Board, limit: usize, solutions: &mut Vec<Board>) {
    if solutions.len() >= limit {
        return;
    }
    let Some(pos) = first_empty(board) else {
        solutions.push(board.clone());
        return;
    };
    for digit in Digit::ALL {
        if solutions.len() >= limit {
            return;
        }
        if board.is_valid_value(pos, digit) {
            collect_solutions(&board.with_digit(pos, digit), limit, solutions);
        }
    }
}

fn first_empty(board: &Board) -> Option<Position> {
    Position::all().find(|&pos| board.is_empty(pos))
}

fn count_empty(board: &Board) -> usize {
    Position::all().filter(|&pos| board.is_empty(pos)).count()
}
