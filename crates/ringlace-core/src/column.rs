//! Radial columns crossing the board center.

use std::fmt::{self, Display};

use crate::Angle;

/// One of the 6 radial lines crossing the board center.
///
/// The board has 12 angular slots but only 6 physical columns: column `c`
/// spans the two opposite slots `c` and `c + 6`. Shifting a column slides
/// both halves along the same line at once.
///
/// # Examples
///
/// ```
/// use ringlace_core::{Angle, Column};
///
/// let column = Column::C3;
/// assert_eq!(column.value(), 3);
/// assert_eq!(column.angles(), [Angle::new(3), Angle::new(9)]);
///
/// // Iterate over all columns
/// for column in Column::ALL {
///     assert!(column.value() < 6);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Column {
    /// The column through slots 0 and 6.
    C0 = 0,
    /// The column through slots 1 and 7.
    C1 = 1,
    /// The column through slots 2 and 8.
    C2 = 2,
    /// The column through slots 3 and 9.
    C3 = 3,
    /// The column through slots 4 and 10.
    C4 = 4,
    /// The column through slots 5 and 11.
    C5 = 5,
}

impl Column {
    /// Array containing all 6 columns in order.
    pub const ALL: [Self; 6] = [
        Self::C0,
        Self::C1,
        Self::C2,
        Self::C3,
        Self::C4,
        Self::C5,
    ];

    /// Creates a column from a value in the range 0-5.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-5.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlace_core::Column;
    ///
    /// assert_eq!(Column::from_value(0), Column::C0);
    /// assert_eq!(Column::from_value(5), Column::C5);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => Self::C0,
            1 => Self::C1,
            2 => Self::C2,
            3 => Self::C3,
            4 => Self::C4,
            5 => Self::C5,
            _ => panic!("Invalid column value: {value}"),
        }
    }

    /// Returns the numeric value of this column (0-5).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the two angular positions this column spans.
    ///
    /// The first is on the front half, the second on the back half.
    #[must_use]
    pub fn angles(self) -> [Angle; 2] {
        [Angle::new(self.value()), Angle::new(self.value() + 6)]
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Column> for u8 {
    fn from(column: Column) -> u8 {
        column.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angles_belong_to_column() {
        for column in Column::ALL {
            for angle in column.angles() {
                assert_eq!(angle.column(), column);
            }
        }
    }

    #[test]
    fn test_from_value_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_value(column.value()), column);
        }
    }

    #[test]
    #[should_panic(expected = "Invalid column value: 6")]
    fn test_from_value_out_of_range_panics() {
        let _ = Column::from_value(6);
    }
}
