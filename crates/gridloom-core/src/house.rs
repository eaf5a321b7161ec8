//! Constraint regions: rows, columns, and 3×3 blocks.

use crate::Position;

/// A sudoku house: a row, a column, or a 3×3 block.
///
/// Each house contains 9 cells, and a filled board is valid when every house
/// holds each digit at most once. Blocks are derived groupings computed from
/// row and column coordinates; they are never stored separately.
///
/// # Examples
///
/// ```
/// use gridloom_core::{House, Position};
///
/// // The three houses constraining a cell
/// let [row, column, block] = House::of(Position::new(4, 7));
/// assert_eq!(row, House::Row { y: 7 });
/// assert_eq!(column, House::Column { x: 4 });
/// assert_eq!(block, House::Block { index: 7 });
///
/// // Every house spans 9 cells
/// assert_eq!(block.positions().count(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 block identified by its index (0-8, left to right, top to bottom).
    Block {
        /// Block index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses in row, column, block order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Block { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the three houses that constrain `pos`: its row, its column,
    /// and its block.
    #[must_use]
    pub const fn of(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Block { index: pos.block() },
        ]
    }

    /// Iterates the 9 positions belonging to this house.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0u8..9).map(move |i| self.position(i))
    }

    fn position(self, i: u8) -> Position {
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Block { index } => {
                Position::new((index % 3) * 3 + i % 3, (index / 3) * 3 + i / 3)
            }
        }
    }
}
