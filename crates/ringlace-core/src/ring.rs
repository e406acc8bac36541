//! Ring indices.

use std::fmt::{self, Display};

/// A ring index, counted outward from 1.
///
/// Ring 1 is the innermost ring; the outermost ring is determined by the
/// board [`Layout`]. Pieces never rest outside `1..=ring_count`; the
/// shift geometry reflects anything that would cross either boundary back
/// onto the board.
///
/// [`Layout`]: crate::Layout
///
/// # Examples
///
/// ```
/// use ringlace_core::Ring;
///
/// let ring = Ring::new(3);
/// assert_eq!(ring.value(), 3);
/// assert_eq!(Ring::INNERMOST.value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ring(u8);

impl Ring {
    /// The innermost ring, index 1.
    pub const INNERMOST: Self = Self(1);

    /// Creates a ring index from a 1-based value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0.
    ///
    /// ```should_panic
    /// use ringlace_core::Ring;
    ///
    /// // This will panic
    /// let _ = Ring::new(0);
    /// ```
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(value >= 1, "Invalid ring value: {value}");
        Self(value)
    }

    /// Returns the 1-based index of this ring.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Ring> for u8 {
    fn from(ring: Ring) -> u8 {
        ring.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Ring::new(1), Ring::INNERMOST);
        assert_eq!(Ring::new(4).value(), 4);
        assert_eq!(format!("{}", Ring::new(2)), "2");
    }

    #[test]
    #[should_panic(expected = "Invalid ring value: 0")]
    fn test_new_zero_panics() {
        let _ = Ring::new(0);
    }
}
