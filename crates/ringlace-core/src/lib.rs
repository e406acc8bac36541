//! Core data structures for the ringlace puzzle.
//!
//! This crate models the discrete state of a circular sliding-ring puzzle:
//! concentric rings of 12 angular slots, pieces that rest on cells, and the
//! two move transforms: spinning a ring and shifting a radial column with
//! reflection at the center and the outer edge.
//!
//! # Overview
//!
//! 1. **Coordinates**: typed board coordinates
//!    - [`angle`]: angular positions 0-11
//!    - [`column`]: the 6 radial columns, each spanning two opposite slots
//!    - [`ring`]: 1-based ring indices
//!    - [`cell`]: a (ring, angle) pair
//!
//! 2. **Moves** ([`moves`]): spins, shifts, their directions and axes, and
//!    the unit-step decomposition used for repeated application.
//!
//! 3. **Geometry** ([`layout`]): pure cell transforms encoding the
//!    wraparound rules, including the boundary reflection that carries a
//!    piece through the center onto the opposite half of its column.
//!
//! 4. **Pieces** ([`piece`] and [`board`]): the authoritative registry of
//!    occupied cells, updated by applying moves.
//!
//! # Examples
//!
//! ```
//! use ringlace_core::{Angle, Board, Cell, Column, GroupId, Layout, Move, Ring, ShiftDir};
//!
//! let mut board = Board::new(Layout::default());
//! let id = board
//!     .insert(Cell::new(Ring::new(1), Angle::new(0)), GroupId::new(0))
//!     .unwrap();
//!
//! // Shift twice: through the center and back out on the opposite half.
//! board.apply(Move::shift(Column::C0, ShiftDir::Down, 2));
//! assert_eq!(board.piece(id).cell(), Cell::new(Ring::new(2), Angle::new(6)));
//! ```

pub mod angle;
pub mod board;
pub mod cell;
pub mod column;
pub mod layout;
pub mod moves;
pub mod piece;
pub mod ring;

// Re-export commonly used types
pub use self::{
    angle::Angle,
    board::{Board, BoardError},
    cell::Cell,
    column::Column,
    layout::Layout,
    moves::{Axis, Move, ShiftDir, SpinDir, Steps},
    piece::{GroupId, Piece, PieceId, SolveStatus},
    ring::Ring,
};
