//! Scramble driver.

use rand::{Rng, RngExt as _};
use ringlace_core::{Board, Move, ShiftDir, SpinDir};

use crate::GeneratorConfig;

/// Maximum repetition count for a scramble spin. Six slots is half a
/// turn; anything further is closer the other way round.
const MAX_SPIN_REPS: u32 = 6;

/// Applies a bounded random move sequence to a solved board and returns
/// the applied moves in order.
///
/// Every candidate move is derived from a randomly chosen piece already
/// on the board, so each accepted move relocates at least one piece. A
/// candidate on the same axis as the previously recorded move is
/// rejected outright: the scrambler never merges, so a same-axis repeat
/// would either extend or partially cancel its predecessor instead of
/// adding a distinct move. The returned sequence, replayed from the end
/// with each direction inverted, restores the solved layout.
pub(crate) fn scramble<R>(rng: &mut R, board: &mut Board, config: &GeneratorConfig) -> Vec<Move>
where
    R: Rng,
{
    let target = usize::from(rng.random_range(1..=config.max_moves()));
    let mut solution = Vec::with_capacity(target);
    while solution.len() < target {
        let piece = &board.pieces()[rng.random_range(0..board.len())];
        let mv = if rng.random::<bool>() {
            let dir = if rng.random::<bool>() {
                SpinDir::Clockwise
            } else {
                SpinDir::Counterclockwise
            };
            Move::spin(piece.cell().ring(), dir, rng.random_range(1..=MAX_SPIN_REPS))
        } else {
            let dir = if rng.random::<bool>() {
                ShiftDir::Up
            } else {
                ShiftDir::Down
            };
            let max_reps = u32::from(config.layout().ring_count());
            Move::shift(
                piece.cell().angle().column(),
                dir,
                rng.random_range(1..=max_reps),
            )
        };
        if solution.last().is_some_and(|last: &Move| last.axis() == mv.axis()) {
            continue;
        }
        board.apply(mv);
        solution.push(mv);
    }
    solution
}
