//! Solve detection passes.

use ringlace_core::{Angle, Board, Cell, PieceId, Ring, SolveStatus};

/// Classifies every piece on the board.
///
/// Resets all classifications, then runs the column pass followed by the
/// square pass. Columns are evaluated first: any piece on the outer rings
/// can only belong to a column grouping, and a piece solved by one pass is
/// skipped by the next.
pub fn classify(board: &mut Board) {
    board.reset_statuses();
    let ids: Vec<_> = board.piece_ids().collect();
    for &id in &ids {
        solve_column(board, id);
    }
    for &id in &ids {
        solve_square(board, id);
    }
}

/// Classifies every piece and reports whether the puzzle is solved.
///
/// The puzzle is solved iff every piece ends up [`SolveStatus::Solved`];
/// a piece left `Unchecked` or `Checked` fails the check.
///
/// # Examples
///
/// ```
/// use ringlace_core::{Angle, Board, Cell, GroupId, Layout, Ring};
/// use ringlace_solver::check_solve;
///
/// let mut board = Board::new(Layout::default());
/// for ring in 1..=4 {
///     board
///         .insert(Cell::new(Ring::new(ring), Angle::new(5)), GroupId::new(0))
///         .unwrap();
/// }
/// assert!(check_solve(&mut board));
/// ```
pub fn check_solve(board: &mut Board) -> bool {
    classify(board);
    board
        .pieces()
        .iter()
        .all(|piece| piece.status() == SolveStatus::Solved)
}

/// Column pass for one piece.
///
/// Only pieces on the outermost ring anchor a column walk; the walk
/// proceeds inward at the same angle. A full column solves every member,
/// a partial one marks the found members `Checked` so later passes know
/// they have been examined.
fn solve_column(board: &mut Board, id: PieceId) {
    let piece = board.piece(id);
    if piece.status() != SolveStatus::Unchecked {
        return;
    }
    let outermost = board.layout().outermost();
    if piece.cell().ring() != outermost {
        return;
    }

    let angle = piece.cell().angle();
    let mut members = vec![id];
    let mut complete = true;
    for ring in (1..outermost.value()).rev() {
        match board.piece_at(Cell::new(Ring::new(ring), angle)) {
            Some(found) => members.push(found.id()),
            None => complete = false,
        }
    }

    let status = if complete {
        SolveStatus::Solved
    } else {
        SolveStatus::Checked
    };
    for member in members {
        board.set_status(member, status);
    }
}

/// Square pass for one piece.
///
/// Squares are anchored on ring 2. If another ring-2 piece sits
/// immediately at `angle - 1`, that piece's square is evaluated first:
/// recursing to the far end of a run of adjacent pieces prevents solving
/// an improper square out of the middle of a 2×4 formation. Pieces
/// already solved by an earlier evaluation are skipped.
fn solve_square(board: &mut Board, id: PieceId) {
    // A run of adjacent ring-2 pieces can wrap the whole ring, so the
    // counter-clockwise walk is bounded to one lap short of its start.
    solve_square_within(board, id, Angle::SLOTS - 1);
}

fn solve_square_within(board: &mut Board, id: PieceId, fuel: u8) {
    if board.piece(id).status() == SolveStatus::Solved {
        return;
    }
    let cell = board.piece(id).cell();
    if cell.ring() != Ring::new(2) {
        return;
    }

    let angle = cell.angle();
    let prev = angle.offset(11);
    if fuel > 0
        && let Some(neighbor) = board.piece_at(Cell::new(Ring::new(2), prev))
    {
        let neighbor = neighbor.id();
        solve_square_within(board, neighbor, fuel - 1);
        if board.piece(id).status() == SolveStatus::Solved {
            // solved as part of the neighbor's square
            return;
        }
    }

    let next = angle.offset(1);
    let mut members = vec![id];
    for corner in [
        Cell::new(Ring::new(2), next),
        Cell::new(Ring::INNERMOST, angle),
        Cell::new(Ring::INNERMOST, next),
    ] {
        if let Some(found) = board.piece_at(corner)
            && found.status() != SolveStatus::Solved
        {
            members.push(found.id());
        }
    }

    let status = if members.len() == 4 {
        SolveStatus::Solved
    } else {
        SolveStatus::Checked
    };
    for member in members {
        board.set_status(member, status);
    }
}
