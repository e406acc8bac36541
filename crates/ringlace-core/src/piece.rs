//! Puzzle pieces and their solve classification.

use std::fmt::{self, Display};

use crate::Cell;

/// Solve classification of a piece, assigned by the solve detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveStatus {
    /// Not yet examined by the current pass.
    #[default]
    Unchecked,
    /// Examined but not part of a completed grouping.
    Checked,
    /// Part of a completed column or square grouping.
    Solved,
}

/// Identifier of the piece group a piece was created in.
///
/// Groups correspond to the color tags of a puzzle set: every piece placed
/// as part of the same column or square grouping shares a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(u8);

impl GroupId {
    /// Creates a group identifier.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the numeric value of this group.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Identifier of a piece within its [`Board`].
///
/// Ids are assigned by [`Board::insert`] and stay valid until the board is
/// cleared.
///
/// [`Board`]: crate::Board
/// [`Board::insert`]: crate::Board::insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) usize);

impl Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A puzzle piece: identity, group tag, current cell, and solve
/// classification.
///
/// Pieces are created at puzzle-build time, relocated in place by every
/// spin or shift transform, and destroyed when the board is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    group: GroupId,
    cell: Cell,
    status: SolveStatus,
}

impl Piece {
    pub(crate) fn new(id: PieceId, group: GroupId, cell: Cell) -> Self {
        Self {
            id,
            group,
            cell,
            status: SolveStatus::Unchecked,
        }
    }

    /// Returns the identifier of this piece.
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Returns the group this piece belongs to.
    #[must_use]
    pub const fn group(&self) -> GroupId {
        self.group
    }

    /// Returns the cell this piece currently rests on.
    #[must_use]
    pub const fn cell(&self) -> Cell {
        self.cell
    }

    /// Returns the current solve classification.
    #[must_use]
    pub const fn status(&self) -> SolveStatus {
        self.status
    }

    pub(crate) fn set_cell(&mut self, cell: Cell) {
        self.cell = cell;
    }

    pub(crate) fn set_status(&mut self, status: SolveStatus) {
        self.status = status;
    }
}
