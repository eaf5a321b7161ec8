//! Benchmarks for the backtracking search.
//!
//! # Benchmarks
//!
//! - **`solve_one_easy`**: first-solution search on the classic easy puzzle.
//! - **`solve_all_two_solution`**: exhaustive enumeration of a grid with
//!   exactly two completions.
//! - **`solve_up_to_empty`**: bounded enumeration of the fully empty board.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use gridloom_core::Board;

const EASY_PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const TWO_SOLUTION_PUZZLE: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 76_ 42_
    426 85_ 79_
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

fn bench_solve_one_easy(c: &mut Criterion) {
    let puzzle: Board = EASY_PUZZLE.parse().unwrap();
    c.bench_function("solve_one_easy", |b| {
        b.iter(|| gridloom_solver::solve_one(hint::black_box(&puzzle)));
    });
}

fn bench_solve_all_two_solution(c: &mut Criterion) {
    let puzzle: Board = TWO_SOLUTION_PUZZLE.parse().unwrap();
    c.bench_function("solve_all_two_solution", |b| {
        b.iter(|| gridloom_solver::solve_all(hint::black_box(&puzzle)));
    });
}

fn bench_solve_up_to_empty(c: &mut Criterion) {
    let empty = Board::empty();
    c.bench_function("solve_up_to_empty", |b| {
        b.iter(|| gridloom_solver::solve_up_to(hint::black_box(&empty), 2));
    });
}

criterion_group!(
    benches,
    bench_solve_one_easy,
    bench_solve_all_two_solution,
    bench_solve_up_to_empty
);
criterion_main!(benches);
