//! Solved-layout placement.

use rand::{Rng, RngExt as _};
use ringlace_core::{Angle, Board, Cell, GroupId, Ring};

use crate::GeneratorConfig;

/// Builds a solved board: a random number of piece groups, each either a
/// full radial column or a 2×2 square on the two innermost rings.
///
/// A placement that collides with an existing group is rejected and a new
/// random slot is drawn. The config caps group count so that a free slot
/// always exists and the retry loop terminates.
pub(crate) fn build_layout<R>(rng: &mut R, config: &GeneratorConfig) -> Board
where
    R: Rng,
{
    let mut board = Board::new(config.layout());
    let sets = rng.random_range(1..=config.max_sets());
    let mut placed = 0;
    while placed < sets {
        let group = GroupId::new(placed);
        let angle = Angle::new(rng.random_range(0..Angle::SLOTS));
        if rng.random::<bool>() {
            if column_is_free(&board, angle) {
                place_column(&mut board, angle, group);
                placed += 1;
            }
        } else if square_is_free(&board, angle) {
            place_square(&mut board, angle, group);
            placed += 1;
        }
    }
    board
}

/// No piece may rest anywhere at the column's angle, on any ring.
fn column_is_free(board: &Board, angle: Angle) -> bool {
    board.pieces().iter().all(|piece| piece.cell().angle() != angle)
}

fn place_column(board: &mut Board, angle: Angle, group: GroupId) {
    for ring in 1..=board.layout().ring_count() {
        board
            .insert(Cell::new(Ring::new(ring), angle), group)
            .expect("column cells are free by the placement check");
    }
}

/// The square's two angles must be empty on both inner rings.
fn square_is_free(board: &Board, angle: Angle) -> bool {
    let next = angle.offset(1);
    board.pieces().iter().all(|piece| {
        let cell = piece.cell();
        (cell.angle() != angle && cell.angle() != next) || cell.ring().value() > 2
    })
}

fn place_square(board: &mut Board, angle: Angle, group: GroupId) {
    for ring in 1..=2 {
        for angle in [angle, angle.offset(1)] {
            board
                .insert(Cell::new(Ring::new(ring), angle), group)
                .expect("square cells are free by the placement check");
        }
    }
}
