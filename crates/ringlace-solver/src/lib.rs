//! Solve detection for the ringlace puzzle.
//!
//! A puzzle is solved when every piece belongs to a completed grouping:
//! either a full radial column (one piece on every ring at one angle) or a
//! 2×2 square on the two innermost rings. The detector is a stateless pass
//! over the board's piece registry, run on demand — it classifies every
//! piece as [`Solved`], [`Checked`] (examined, grouping incomplete) or
//! [`Unchecked`], and the puzzle is solved iff nothing is left below
//! `Solved`.
//!
//! [`Solved`]: ringlace_core::SolveStatus::Solved
//! [`Checked`]: ringlace_core::SolveStatus::Checked
//! [`Unchecked`]: ringlace_core::SolveStatus::Unchecked
//!
//! # Examples
//!
//! ```
//! use ringlace_core::{Angle, Board, Cell, GroupId, Layout, Ring, SpinDir};
//! use ringlace_solver::check_solve;
//!
//! let mut board = Board::new(Layout::default());
//! for ring in 1..=4 {
//!     board
//!         .insert(Cell::new(Ring::new(ring), Angle::new(0)), GroupId::new(0))
//!         .unwrap();
//! }
//! assert!(check_solve(&mut board));
//!
//! // Rotating one ring breaks the column.
//! board.spin(Ring::new(2), SpinDir::Clockwise);
//! assert!(!check_solve(&mut board));
//! ```

pub mod detector;

pub use self::detector::{check_solve, classify};
