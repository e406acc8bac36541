//! Moves: spins, shifts, and their axes.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::{Column, Ring};

/// Direction of a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpinDir {
    /// Rotate the ring clockwise (decrements every angular position).
    Clockwise,
    /// Rotate the ring counterclockwise (increments every angular position).
    Counterclockwise,
}

impl SpinDir {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::Counterclockwise,
            Self::Counterclockwise => Self::Clockwise,
        }
    }
}

impl Display for SpinDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Clockwise => "cw",
            Self::Counterclockwise => "ccw",
        };
        f.write_str(s)
    }
}

/// Direction of a shift, as a translation of the whole column.
///
/// The two halves of a column lie on opposite sides of the center, so a
/// single translation direction means opposite radial motion for each
/// half: `Up` slides front-half pieces (slots 0-5) outward and back-half
/// pieces inward, `Down` the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftDir {
    /// Slide the column toward the front half's outer edge.
    Up,
    /// Slide the column toward the back half's outer edge.
    Down,
}

impl ShiftDir {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl Display for ShiftDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
        };
        f.write_str(s)
    }
}

/// The axis a move operates on: a ring for spins, a column for shifts.
///
/// Two moves are mergeable in a move log iff their axes are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A spin axis.
    Ring(Ring),
    /// A shift axis.
    Column(Column),
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ring(ring) => write!(f, "ring {ring}"),
            Self::Column(column) => write!(f, "column {column}"),
        }
    }
}

/// A puzzle move: a repeated spin or shift treated as one undoable unit.
///
/// A repetition count greater than 1 means the single-step transform is
/// applied that many times in sequence, not as one batched step:
/// intermediate boundary reflections change which half of the column a
/// piece is on, and with it the effective direction of later steps.
///
/// # Examples
///
/// ```
/// use ringlace_core::{Move, Ring, SpinDir};
///
/// let mv = Move::spin(Ring::new(2), SpinDir::Clockwise, 3);
/// assert_eq!(mv.reps(), 3);
/// assert_eq!(mv.steps().count(), 3);
/// assert_eq!(mv.reversed().reversed(), mv);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Rotate all pieces on one ring.
    Spin {
        /// The ring to rotate.
        ring: Ring,
        /// Rotation direction.
        dir: SpinDir,
        /// Number of single-slot steps, at least 1.
        reps: u32,
    },
    /// Slide all pieces in one column radially.
    Shift {
        /// The column to slide.
        column: Column,
        /// Translation direction.
        dir: ShiftDir,
        /// Number of single-ring steps, at least 1.
        reps: u32,
    },
}

impl Move {
    /// Creates a spin move.
    ///
    /// # Panics
    ///
    /// Panics if `reps` is 0.
    #[must_use]
    pub fn spin(ring: Ring, dir: SpinDir, reps: u32) -> Self {
        assert!(reps >= 1, "Move repetition count must be at least 1");
        Self::Spin { ring, dir, reps }
    }

    /// Creates a shift move.
    ///
    /// # Panics
    ///
    /// Panics if `reps` is 0.
    #[must_use]
    pub fn shift(column: Column, dir: ShiftDir, reps: u32) -> Self {
        assert!(reps >= 1, "Move repetition count must be at least 1");
        Self::Shift { column, dir, reps }
    }

    /// Returns the axis this move operates on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Spin { ring, .. } => Axis::Ring(ring),
            Self::Shift { column, .. } => Axis::Column(column),
        }
    }

    /// Returns the repetition count.
    #[must_use]
    pub const fn reps(self) -> u32 {
        match self {
            Self::Spin { reps, .. } | Self::Shift { reps, .. } => reps,
        }
    }

    /// Returns this move with a different repetition count.
    ///
    /// # Panics
    ///
    /// Panics if `reps` is 0.
    #[must_use]
    pub fn with_reps(self, reps: u32) -> Self {
        assert!(reps >= 1, "Move repetition count must be at least 1");
        match self {
            Self::Spin { ring, dir, .. } => Self::Spin { ring, dir, reps },
            Self::Shift { column, dir, .. } => Self::Shift { column, dir, reps },
        }
    }

    /// Returns the exact inverse of this move: same axis and repetition
    /// count, opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Spin { ring, dir, reps } => Self::Spin {
                ring,
                dir: dir.reversed(),
                reps,
            },
            Self::Shift { column, dir, reps } => Self::Shift {
                column,
                dir: dir.reversed(),
                reps,
            },
        }
    }

    /// Returns `true` if `other` travels in the same direction as this
    /// move. Moves of different kinds never match.
    #[must_use]
    pub fn direction_matches(self, other: Self) -> bool {
        match (self, other) {
            (Self::Spin { dir: a, .. }, Self::Spin { dir: b, .. }) => a == b,
            (Self::Shift { dir: a, .. }, Self::Shift { dir: b, .. }) => a == b,
            _ => false,
        }
    }

    /// Returns an iterator over this move decomposed into unit-repetition
    /// steps, in application order.
    ///
    /// Consumers that animate or pace a move walk these steps one at a
    /// time; the board applies them in sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlace_core::{Column, Move, ShiftDir};
    ///
    /// let mv = Move::shift(Column::C0, ShiftDir::Down, 2);
    /// let steps: Vec<_> = mv.steps().collect();
    /// assert_eq!(steps, vec![mv.with_reps(1), mv.with_reps(1)]);
    /// ```
    #[must_use]
    pub fn steps(self) -> Steps {
        Steps {
            step: self.with_reps(1),
            remaining: self.reps(),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spin { ring, dir, reps } => write!(f, "spin ring {ring} {dir} x{reps}"),
            Self::Shift { column, dir, reps } => {
                write!(f, "shift column {column} {dir} x{reps}")
            }
        }
    }
}

/// Iterator over the unit-repetition steps of a [`Move`].
#[derive(Debug, Clone)]
pub struct Steps {
    step: Move,
    remaining: u32,
}

impl Iterator for Steps {
    type Item = Move;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.step)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps {}
impl FusedIterator for Steps {}
