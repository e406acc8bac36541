//! The piece registry.

use derive_more::{Display, Error};

use crate::{
    Cell, Column, GroupId, Layout, Move, Piece, PieceId, Ring, ShiftDir, SolveStatus, SpinDir,
};

/// Error type for board mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A piece already rests on the target cell.
    #[display("cell {cell} is already occupied")]
    CellOccupied {
        /// The occupied cell.
        cell: Cell,
    },
    /// The target cell's ring lies outside the board.
    #[display("ring {ring} is outside the board")]
    RingOutsideBoard {
        /// The offending ring.
        ring: Ring,
    },
}

/// The authoritative registry of pieces on a board.
///
/// The board owns the [`Layout`] and the set of occupied cells. Spins and
/// shifts filter the registry by ring or column and relocate every
/// matching piece through the layout's cell transforms, one step at a
/// time, so repeated shifts reflect correctly at the boundaries.
///
/// # Examples
///
/// ```
/// use ringlace_core::{Angle, Board, Cell, GroupId, Layout, Ring, SpinDir};
///
/// let mut board = Board::new(Layout::default());
/// let cell = Cell::new(Ring::new(1), Angle::new(0));
/// let id = board.insert(cell, GroupId::new(0)).unwrap();
///
/// board.spin(Ring::new(1), SpinDir::Counterclockwise);
/// assert_eq!(board.piece(id).cell(), Cell::new(Ring::new(1), Angle::new(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    layout: Layout,
    pieces: Vec<Piece>,
}

impl Board {
    /// Creates an empty board with the given layout.
    #[must_use]
    pub const fn new(layout: Layout) -> Self {
        Self {
            layout,
            pieces: Vec::new(),
        }
    }

    /// Returns the board layout.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the number of pieces on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns `true` if the board holds no pieces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Returns all pieces on the board, in insertion order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the identifiers of all pieces, in insertion order.
    pub fn piece_ids(&self) -> impl Iterator<Item = PieceId> + use<> {
        (0..self.pieces.len()).map(PieceId)
    }

    /// Returns the piece with the given identifier.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this board since its last clear.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// Returns the piece resting on `cell`, if any.
    #[must_use]
    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.cell() == cell)
    }

    /// Places a new piece on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOccupied`] if a piece already rests on
    /// `cell`, or [`BoardError::RingOutsideBoard`] if the cell's ring is
    /// not part of this board.
    pub fn insert(&mut self, cell: Cell, group: GroupId) -> Result<PieceId, BoardError> {
        if !self.layout.contains(cell.ring()) {
            return Err(BoardError::RingOutsideBoard { ring: cell.ring() });
        }
        if self.piece_at(cell).is_some() {
            return Err(BoardError::CellOccupied { cell });
        }
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(id, group, cell));
        Ok(id)
    }

    /// Rotates every piece on `ring` by one slot in `dir`.
    pub fn spin(&mut self, ring: Ring, dir: SpinDir) {
        let layout = self.layout;
        for piece in &mut self.pieces {
            if piece.cell().ring() == ring {
                piece.set_cell(layout.spin_cell(piece.cell(), dir));
            }
        }
    }

    /// Slides every piece in `column` by one ring step in `dir`.
    ///
    /// Column membership is preserved by the transform (a reflection flips
    /// a piece to the opposite half of the same column), so repeated calls
    /// keep affecting the same pieces.
    pub fn shift(&mut self, column: Column, dir: ShiftDir) {
        let layout = self.layout;
        for piece in &mut self.pieces {
            if piece.cell().angle().column() == column {
                piece.set_cell(layout.shift_cell(piece.cell(), dir));
            }
        }
    }

    /// Applies a move, repeating its single-step transform `reps` times in
    /// sequence.
    pub fn apply(&mut self, mv: Move) {
        for step in mv.steps() {
            match step {
                Move::Spin { ring, dir, .. } => self.spin(ring, dir),
                Move::Shift { column, dir, .. } => self.shift(column, dir),
            }
        }
    }

    /// Applies the exact inverse of a move.
    pub fn apply_reversed(&mut self, mv: Move) {
        self.apply(mv.reversed());
    }

    /// Sets the solve classification of one piece.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this board since its last clear.
    pub fn set_status(&mut self, id: PieceId, status: SolveStatus) {
        self.pieces[id.0].set_status(status);
    }

    /// Resets every piece's solve classification to
    /// [`SolveStatus::Unchecked`].
    pub fn reset_statuses(&mut self) {
        for piece in &mut self.pieces {
            piece.set_status(SolveStatus::Unchecked);
        }
    }

    /// Removes every piece from the board. Previously issued ids become
    /// invalid.
    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}
