//! Angular position around a ring.

use std::fmt::{self, Display};

use crate::{Column, SpinDir};

/// An angular position on the board, one of 12 discrete slots (30° apart).
///
/// Every ring carries the same 12 slots, numbered 0-11 counterclockwise.
/// All operations keep the value reduced modulo 12; slots 0-5 form the
/// "front" half of the board and slots 6-11 the diametrically opposite
/// "back" half.
///
/// # Examples
///
/// ```
/// use ringlace_core::Angle;
///
/// let angle = Angle::new(5);
/// assert_eq!(angle.value(), 5);
/// assert_eq!(angle.opposite().value(), 11);
///
/// // Iterate over all slots
/// assert_eq!(Angle::ALL.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(u8);

impl Angle {
    /// Number of angular slots per ring.
    pub const SLOTS: u8 = 12;

    /// Array containing all 12 angular positions in order.
    pub const ALL: [Self; 12] = {
        let mut all = [Self(0); 12];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 12 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates an angular position from a slot value in the range 0-11.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-11.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlace_core::Angle;
    ///
    /// let angle = Angle::new(0);
    /// assert_eq!(angle.value(), 0);
    /// ```
    ///
    /// ```should_panic
    /// use ringlace_core::Angle;
    ///
    /// // This will panic
    /// let _ = Angle::new(12);
    /// ```
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(value < Self::SLOTS, "Invalid angle value: {value}");
        Self(value)
    }

    /// Returns the slot value of this position (0-11).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the position one slot away in the given spin direction.
    ///
    /// Clockwise decrements the slot value; both directions wrap modulo 12.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlace_core::{Angle, SpinDir};
    ///
    /// let angle = Angle::new(0);
    /// assert_eq!(angle.stepped(SpinDir::Clockwise).value(), 11);
    /// assert_eq!(angle.stepped(SpinDir::Counterclockwise).value(), 1);
    /// ```
    #[must_use]
    pub fn stepped(self, dir: SpinDir) -> Self {
        let delta = match dir {
            SpinDir::Clockwise => Self::SLOTS - 1,
            SpinDir::Counterclockwise => 1,
        };
        Self((self.0 + delta) % Self::SLOTS)
    }

    /// Returns the position `slots` counterclockwise steps away, wrapping
    /// modulo 12.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlace_core::Angle;
    ///
    /// assert_eq!(Angle::new(10).offset(3), Angle::new(1));
    /// // 11 steps counterclockwise is one step clockwise
    /// assert_eq!(Angle::new(0).offset(11), Angle::new(11));
    /// ```
    #[must_use]
    pub const fn offset(self, slots: u8) -> Self {
        Self((self.0 + slots % Self::SLOTS) % Self::SLOTS)
    }

    /// Returns the diametrically opposite position (`+6 mod 12`).
    ///
    /// A piece crossing the board center or the outer edge reappears at
    /// this position.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self((self.0 + 6) % Self::SLOTS)
    }

    /// Returns the column this position belongs to.
    ///
    /// Positions `a` and `a + 6` share a column.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlace_core::{Angle, Column};
    ///
    /// assert_eq!(Angle::new(2).column(), Column::C2);
    /// assert_eq!(Angle::new(8).column(), Column::C2);
    /// ```
    #[must_use]
    pub fn column(self) -> Column {
        Column::from_value(self.0 % 6)
    }

    /// Returns `true` if this position lies on the front half of the board
    /// (slots 0-5).
    #[must_use]
    pub const fn is_front(self) -> bool {
        self.0 < 6
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Angle> for u8 {
    fn from(angle: Angle) -> u8 {
        angle.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps_both_ways() {
        assert_eq!(
            Angle::new(11).stepped(SpinDir::Counterclockwise),
            Angle::new(0)
        );
        assert_eq!(Angle::new(0).stepped(SpinDir::Clockwise), Angle::new(11));

        for angle in Angle::ALL {
            let there = angle.stepped(SpinDir::Clockwise);
            assert_eq!(there.stepped(SpinDir::Counterclockwise), angle);
        }
    }

    #[test]
    fn test_opposite_is_involutive() {
        for angle in Angle::ALL {
            assert_ne!(angle.opposite(), angle);
            assert_eq!(angle.opposite().opposite(), angle);
            assert_eq!(angle.opposite().column(), angle.column());
            assert_ne!(angle.opposite().is_front(), angle.is_front());
        }
    }

    #[test]
    fn test_all_is_ordered() {
        for (i, angle) in Angle::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(angle.value()), i);
        }
    }

    #[test]
    #[should_panic(expected = "Invalid angle value: 12")]
    fn test_new_out_of_range_panics() {
        let _ = Angle::new(12);
    }
}
