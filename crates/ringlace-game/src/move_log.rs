//! The merging move log.

use ringlace_core::Move;

/// A log of the player's moves, merged so each entry is one undoable unit.
///
/// A new move on the same axis as the newest entry is folded into it:
/// repetitions add when the directions match and subtract when they
/// oppose. An entry whose repetitions reach zero has been played back to
/// its starting position and is removed; an entry pushed past zero flips
/// its direction and keeps the leftover magnitude. Undo exploits the
/// merge directly: replaying the newest entry reversed cancels it out
/// of the log.
///
/// # Examples
///
/// ```
/// use ringlace_core::{Move, Ring, SpinDir};
/// use ringlace_game::MoveLog;
///
/// let mut log = MoveLog::new();
/// log.append(Move::spin(Ring::new(1), SpinDir::Clockwise, 2));
/// log.append(Move::spin(Ring::new(1), SpinDir::Clockwise, 1));
/// assert_eq!(log.last(), Some(Move::spin(Ring::new(1), SpinDir::Clockwise, 3)));
///
/// log.append(Move::spin(Ring::new(1), SpinDir::Counterclockwise, 3));
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    entries: Vec<Move>,
}

impl MoveLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a move, merging it into the newest entry when both lie on
    /// the same axis.
    pub fn append(&mut self, mv: Move) {
        if let Some(last) = self.entries.last_mut()
            && last.axis() == mv.axis()
        {
            if last.direction_matches(mv) {
                *last = last.with_reps(last.reps().saturating_add(mv.reps()));
            } else if last.reps() > mv.reps() {
                *last = last.with_reps(last.reps() - mv.reps());
            } else if last.reps() < mv.reps() {
                // pushed past its starting position: the net motion is in
                // the new direction
                *last = mv.with_reps(mv.reps() - last.reps());
            } else {
                self.entries.pop();
            }
            return;
        }
        self.entries.push(mv);
    }

    /// Returns the newest entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<Move> {
        self.entries.last().copied()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the log holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Move] {
        &self.entries
    }

    /// Replaces the log contents wholesale.
    ///
    /// Adjacent entries must not share an axis, or later appends would
    /// merge across what should be distinct undo units.
    pub fn install(&mut self, entries: Vec<Move>) {
        debug_assert!(
            entries
                .windows(2)
                .all(|pair| pair[0].axis() != pair[1].axis()),
            "installed log entries must alternate axes"
        );
        self.entries = entries;
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
