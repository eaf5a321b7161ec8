//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A digit that can be placed in a cell, in the range 1-9.
///
/// An empty cell is represented as `Option<Digit>` being `None`, so the digit
/// type itself never carries a zero. Construction goes through
/// [`Digit::new`], which rejects raw values outside 1-9.
///
/// # Examples
///
/// ```
/// use gridloom_core::Digit;
///
/// let digit = Digit::new(5).unwrap();
/// assert_eq!(digit, Digit::Five);
/// assert_eq!(digit.value(), 5);
///
/// // 0 is the raw encoding of an empty cell, not a digit
/// assert_eq!(Digit::new(0), None);
/// assert_eq!(Digit::new(10), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    One = 1,
    /// The digit 2.
    Two = 2,
    /// The digit 3.
    Three = 3,
    /// The digit 4.
    Four = 4,
    /// The digit 5.
    Five = 5,
    /// The digit 6.
    Six = 6,
    /// The digit 7.
    Seven = 7,
    /// The digit 8.
    Eight = 8,
    /// The digit 9.
    Nine = 9,
}

impl Digit {
    /// All digits in ascending order.
    ///
    /// The backtracking search tries candidates in exactly this order, which
    /// makes the first-found solution deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridloom_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 9);
    /// assert_eq!(Digit::ALL[0], Digit::One);
    /// assert_eq!(Digit::ALL[8], Digit::Nine);
    /// ```
    pub const ALL: [Self; 9] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
    ];

    /// Creates a digit from a raw value, or `None` if it is outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridloom_core::Digit;
    ///
    /// assert_eq!(Digit::new(1), Some(Digit::One));
    /// assert_eq!(Digit::new(9), Some(Digit::Nine));
    /// assert_eq!(Digit::new(0), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            _ => None,
        }
    }

    /// Parses a digit character `'1'`-`'9'`.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let value = u8::try_from(ch.to_digit(10)?).ok()?;
        Self::new(value)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}
