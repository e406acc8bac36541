//! Board layout and cell transform geometry.

use crate::{Cell, Ring, ShiftDir, SpinDir};

/// The geometry of a board: a configurable number of concentric rings,
/// each with 12 angular slots.
///
/// `Layout` is pure and stateless: it maps a cell through one spin or
/// shift step without touching any piece. The registry applies these
/// transforms to the pieces it filters out.
///
/// # Examples
///
/// ```
/// use ringlace_core::{Angle, Cell, Layout, Ring, ShiftDir};
///
/// let layout = Layout::default();
/// assert_eq!(layout.ring_count(), 4);
///
/// // A shift through the center lands on the opposite half.
/// let cell = Cell::new(Ring::new(1), Angle::new(2));
/// let crossed = layout.shift_cell(cell, ShiftDir::Down);
/// assert_eq!(crossed, Cell::new(Ring::new(1), Angle::new(8)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    ring_count: u8,
}

impl Layout {
    /// Ring count of the standard board.
    pub const DEFAULT_RING_COUNT: u8 = 4;

    /// Creates a layout with the given number of rings.
    ///
    /// # Panics
    ///
    /// Panics if `ring_count` is less than 2. Square groups span the two
    /// innermost rings, so a single-ring board has no valid groupings.
    #[must_use]
    pub fn new(ring_count: u8) -> Self {
        assert!(ring_count >= 2, "Invalid ring count: {ring_count}");
        Self { ring_count }
    }

    /// Returns the number of rings.
    #[must_use]
    pub const fn ring_count(self) -> u8 {
        self.ring_count
    }

    /// Returns the outermost ring.
    #[must_use]
    pub fn outermost(self) -> Ring {
        Ring::new(self.ring_count)
    }

    /// Returns `true` if `ring` lies on this board.
    #[must_use]
    pub fn contains(self, ring: Ring) -> bool {
        ring.value() <= self.ring_count
    }

    /// Maps a cell through one spin step: the angular position moves one
    /// slot in `dir`, the ring is unchanged.
    ///
    /// Spinning back in the opposite direction restores the original cell.
    #[must_use]
    pub fn spin_cell(self, cell: Cell, dir: SpinDir) -> Cell {
        Cell::new(cell.ring(), cell.angle().stepped(dir))
    }

    /// Maps a cell through one shift step: one ring inward or outward
    /// along the cell's column, reflecting at the center and at the outer
    /// edge.
    ///
    /// The raw direction is a translation of the whole column, so it is
    /// flipped into a radial direction based on which half the cell is on.
    /// A step past ring 1 or past the outermost ring reflects back onto
    /// the board and flips the angular position to the opposite half:
    /// the piece passes through the center (or over the edge) and lands on
    /// the other side of the column. Because the half changes, the
    /// effective radial direction of any following step changes too;
    /// repeated shifts must therefore be applied one step at a time.
    #[must_use]
    pub fn shift_cell(self, cell: Cell, dir: ShiftDir) -> Cell {
        let inward = if cell.angle().is_front() {
            dir == ShiftDir::Down
        } else {
            dir == ShiftDir::Up
        };
        let ring = cell.ring().value();
        if inward {
            if ring == 1 {
                // through the center: ring 0 reflects to 1
                Cell::new(Ring::INNERMOST, cell.angle().opposite())
            } else {
                Cell::new(Ring::new(ring - 1), cell.angle())
            }
        } else if ring == self.ring_count {
            // over the edge: ring N+1 reflects to N
            Cell::new(self.outermost(), cell.angle().opposite())
        } else {
            Cell::new(Ring::new(ring + 1), cell.angle())
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RING_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Angle;

    fn any_cell(layout: Layout) -> impl Strategy<Value = Cell> {
        (1..=layout.ring_count(), 0u8..12)
            .prop_map(|(ring, angle)| Cell::new(Ring::new(ring), Angle::new(angle)))
    }

    fn any_spin_dir() -> impl Strategy<Value = SpinDir> {
        prop_oneof![Just(SpinDir::Clockwise), Just(SpinDir::Counterclockwise)]
    }

    fn any_shift_dir() -> impl Strategy<Value = ShiftDir> {
        prop_oneof![Just(ShiftDir::Up), Just(ShiftDir::Down)]
    }

    proptest! {
        #[test]
        fn spin_then_reverse_restores_cell(
            cell in any_cell(Layout::default()),
            dir in any_spin_dir(),
        ) {
            let layout = Layout::default();
            let there = layout.spin_cell(cell, dir);
            prop_assert_eq!(layout.spin_cell(there, dir.reversed()), cell);
        }

        #[test]
        fn shift_then_reverse_restores_cell(
            cell in any_cell(Layout::default()),
            dir in any_shift_dir(),
        ) {
            let layout = Layout::default();
            let there = layout.shift_cell(cell, dir);
            prop_assert_eq!(layout.shift_cell(there, dir.reversed()), cell);
        }

        #[test]
        fn repeated_shift_round_trips(
            cell in any_cell(Layout::default()),
            dir in any_shift_dir(),
            k in 1u32..=16,
        ) {
            let layout = Layout::default();
            let mut current = cell;
            for _ in 0..k {
                current = layout.shift_cell(current, dir);
            }
            for _ in 0..k {
                current = layout.shift_cell(current, dir.reversed());
            }
            prop_assert_eq!(current, cell);
        }

        #[test]
        fn shift_stays_on_board_and_in_column(
            cell in any_cell(Layout::new(3)),
            dir in any_shift_dir(),
        ) {
            let layout = Layout::new(3);
            let there = layout.shift_cell(cell, dir);
            prop_assert!(layout.contains(there.ring()));
            prop_assert_eq!(there.angle().column(), cell.angle().column());
        }
    }

    #[test]
    fn test_center_reflection_flips_half() {
        let layout = Layout::default();
        // Front-half cell on ring 1, pushed inward (Down flips to inward
        // on the front half).
        let cell = Cell::new(Ring::new(1), Angle::new(3));
        let crossed = layout.shift_cell(cell, ShiftDir::Down);
        assert_eq!(crossed, Cell::new(Ring::new(1), Angle::new(9)));
    }

    #[test]
    fn test_edge_reflection_flips_half() {
        let layout = Layout::default();
        // Back-half cell on the outermost ring, pushed outward.
        let cell = Cell::new(Ring::new(4), Angle::new(10));
        let crossed = layout.shift_cell(cell, ShiftDir::Down);
        assert_eq!(crossed, Cell::new(Ring::new(4), Angle::new(4)));
    }

    #[test]
    fn test_interior_shift_keeps_angle() {
        let layout = Layout::default();
        let cell = Cell::new(Ring::new(2), Angle::new(0));
        // Up on the front half is outward.
        assert_eq!(
            layout.shift_cell(cell, ShiftDir::Up),
            Cell::new(Ring::new(3), Angle::new(0))
        );
        assert_eq!(
            layout.shift_cell(cell, ShiftDir::Down),
            Cell::new(Ring::new(1), Angle::new(0))
        );
    }

    #[test]
    fn test_effective_direction_flips_per_half() {
        let layout = Layout::default();
        let front = Cell::new(Ring::new(2), Angle::new(1));
        let back = Cell::new(Ring::new(2), Angle::new(7));
        // The same raw direction moves the two halves oppositely in ring
        // terms, which is what slides the column as one line.
        assert_eq!(layout.shift_cell(front, ShiftDir::Up).ring().value(), 3);
        assert_eq!(layout.shift_cell(back, ShiftDir::Up).ring().value(), 1);
    }

    #[test]
    #[should_panic(expected = "Invalid ring count: 1")]
    fn test_single_ring_layout_panics() {
        let _ = Layout::new(1);
    }
}
