//! Shared grid fixtures for solver tests.

use gridloom_core::Board;

/// The classic "easy" sample puzzle with a unique solution.
pub(crate) const EASY_PUZZLE: &str = "
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

/// The unique completion of [`EASY_PUZZLE`].
pub(crate) const EASY_SOLUTION: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// [`EASY_SOLUTION`] with an interchangeable 1/3 rectangle blanked out
/// (rows 3-4, columns 5 and 8), leaving exactly two completions:
/// [`EASY_SOLUTION`] itself and [`TWO_SOLUTION_SWAPPED`].
pub(crate) const TWO_SOLUTION_PUZZLE: &str = "
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

/// The second completion of [`TWO_SOLUTION_PUZZLE`], with the 1/3 pair
/// swapped relative to [`EASY_SOLUTION`].
pub(crate) const TWO_SOLUTION_SWAPPED: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 763 421
    426 851 793
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// [`EASY_PUZZLE`] with a second 5 planted in row 0, making the grid
/// self-contradictory before solving begins.
pub(crate) const CONTRADICTORY_PUZZLE: &str = "
    53_ _7_ __5
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

/// Parses a fixture grid literal.
#[track_caller]
pub(crate) fn board(s: &str) -> Board {
    s.parse().expect("fixture grid must parse")
}
