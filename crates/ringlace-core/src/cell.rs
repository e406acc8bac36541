//! Board cells.

use std::fmt::{self, Display};

use crate::{Angle, Ring};

/// A board cell, identified by ring and angular position.
///
/// Two cells are equal iff both fields match. At rest, at most one piece
/// occupies a cell; the solve detector relies on this.
///
/// # Examples
///
/// ```
/// use ringlace_core::{Angle, Cell, Ring};
///
/// let cell = Cell::new(Ring::new(2), Angle::new(7));
/// assert_eq!(cell.ring().value(), 2);
/// assert_eq!(cell.angle().value(), 7);
/// assert_eq!(cell.to_string(), "(2, 7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    ring: Ring,
    angle: Angle,
}

impl Cell {
    /// Creates a cell at the given ring and angular position.
    #[must_use]
    pub const fn new(ring: Ring, angle: Angle) -> Self {
        Self { ring, angle }
    }

    /// Returns the ring this cell lies on.
    #[must_use]
    pub const fn ring(self) -> Ring {
        self.ring
    }

    /// Returns the angular position of this cell.
    #[must_use]
    pub const fn angle(self) -> Angle {
        self.angle
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.ring, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_field_wise() {
        let cell = Cell::new(Ring::new(1), Angle::new(0));
        assert_eq!(cell, Cell::new(Ring::new(1), Angle::new(0)));
        assert_ne!(cell, Cell::new(Ring::new(2), Angle::new(0)));
        assert_ne!(cell, Cell::new(Ring::new(1), Angle::new(1)));
    }
}
