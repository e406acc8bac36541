//! The game session.

use std::{mem, time::Duration};

use derive_more::{Display, Error};
use ringlace_core::{Board, Column, Move, Ring, ShiftDir, SpinDir};
use ringlace_generator::GeneratedPuzzle;
use ringlace_solver::check_solve;

use crate::MoveLog;

/// Error type for session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A requested move has not been completed yet.
    #[display("a move is already in progress")]
    MoveInProgress,
    /// Two adjacent entries of an installed solution share an axis.
    #[display("solution moves {} and {index} share an axis", index - 1)]
    SolutionSharedAxis {
        /// Index of the second entry of the offending pair.
        index: usize,
    },
    /// An installed solution entry has a zero repetition count.
    #[display("solution move {index} has zero repetitions")]
    SolutionZeroReps {
        /// Index of the offending entry.
        index: usize,
    },
}

/// Whether the session is ready to accept the next move.
///
/// A session accepts one move at a time: an accepted request puts it in
/// [`MoveInProgress`] until the caller finishes pacing the move's steps
/// and calls [`Session::complete_move`]. Requests made while a move is in
/// progress are silently ignored.
///
/// [`MoveInProgress`]: SessionState::MoveInProgress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Ready for the next move.
    #[default]
    Idle,
    /// A move has been requested and not yet completed.
    MoveInProgress,
}

/// Pacing configuration for move playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Duration of one unit step of a player move.
    pub step_duration: Duration,
    /// Duration of one unit step of an undo replay.
    pub undo_step_duration: Duration,
}

impl SessionConfig {
    /// Default duration of one player move step.
    pub const DEFAULT_STEP_DURATION: Duration = Duration::from_millis(300);
    /// Default duration of one undo step.
    pub const DEFAULT_UNDO_STEP_DURATION: Duration = Duration::from_millis(100);
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            step_duration: Self::DEFAULT_STEP_DURATION,
            undo_step_duration: Self::DEFAULT_UNDO_STEP_DURATION,
        }
    }
}

/// A move accepted by the session, ready to be paced by the caller.
///
/// The board has already been updated when the event is returned; the
/// event carries what a front end needs to play the move back, one unit
/// step ([`Move::steps`]) per `step_duration`. The session does not wait
/// for playback; the logical move is complete, only the gate stays
/// closed until [`Session::complete_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    /// The applied move.
    pub mv: Move,
    /// Suggested duration of each unit step.
    pub step_duration: Duration,
}

/// A play session over one generated puzzle.
///
/// The session owns the scrambled board, the player's merged [`MoveLog`],
/// and the recorded scramble sequence. Undo replays the newest log entry
/// reversed, which cancels it out of the log; solving undoes everything
/// the player did, installs the scramble as the log, and undoes that too.
///
/// # Examples
///
/// ```
/// use ringlace_game::Session;
/// use ringlace_generator::{GeneratorConfig, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(GeneratorConfig::default());
/// let mut session = Session::new(generator.generate_with_seed(7));
///
/// session.solve().unwrap();
/// assert!(session.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    log: MoveLog,
    solution: Vec<Move>,
    moves_to_solve: usize,
    state: SessionState,
    config: SessionConfig,
}

impl Session {
    /// Creates a session with default pacing.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::with_config(puzzle, SessionConfig::default())
    }

    /// Creates a session with the given pacing configuration.
    #[must_use]
    pub fn with_config(puzzle: GeneratedPuzzle, config: SessionConfig) -> Self {
        let GeneratedPuzzle {
            board,
            solution,
            seed: _,
        } = puzzle;
        let moves_to_solve = solution.len();
        Self {
            board,
            log: MoveLog::new(),
            solution,
            moves_to_solve,
            state: SessionState::Idle,
            config,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player's move log.
    #[must_use]
    pub const fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Returns whether a move is in progress.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the pacing configuration.
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    /// Returns the length of the recorded scramble.
    #[must_use]
    pub const fn moves_to_solve(&self) -> usize {
        self.moves_to_solve
    }

    /// Returns the scramble length minus the number of logged entries.
    ///
    /// Negative when the player has spent more distinct moves than the
    /// scramble took.
    #[must_use]
    pub fn remaining_moves(&self) -> i64 {
        let target = i64::try_from(self.moves_to_solve).unwrap_or(i64::MAX);
        let logged = i64::try_from(self.log.len()).unwrap_or(i64::MAX);
        target - logged
    }

    /// Requests a one-slot spin of `ring`.
    ///
    /// On success the board is updated, the move is logged, and the
    /// session stays locked until [`complete_move`](Self::complete_move).
    /// Returns `None` without touching any state while a move is in
    /// progress.
    ///
    /// # Panics
    ///
    /// Panics if `ring` is not part of the board.
    pub fn request_spin(&mut self, ring: Ring, dir: SpinDir) -> Option<MoveEvent> {
        assert!(
            self.board.layout().contains(ring),
            "Invalid ring for this board: {ring}"
        );
        if self.state == SessionState::MoveInProgress {
            log::debug!("spin of ring {ring} ignored, move in progress");
            return None;
        }
        Some(self.play(Move::spin(ring, dir, 1), self.config.step_duration))
    }

    /// Requests a one-ring shift of `column`.
    ///
    /// Returns `None` without touching any state while a move is in
    /// progress.
    pub fn request_shift(&mut self, column: Column, dir: ShiftDir) -> Option<MoveEvent> {
        if self.state == SessionState::MoveInProgress {
            log::debug!("shift of column {column} ignored, move in progress");
            return None;
        }
        Some(self.play(Move::shift(column, dir, 1), self.config.step_duration))
    }

    fn play(&mut self, mv: Move, step_duration: Duration) -> MoveEvent {
        log::debug!("applying {mv}");
        for step in mv.steps() {
            log::trace!("applying step {step}");
            self.board.apply(step);
        }
        self.log.append(mv);
        self.state = SessionState::MoveInProgress;
        MoveEvent { mv, step_duration }
    }

    /// Marks the in-progress move as completed, unlocking the session.
    pub fn complete_move(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Undoes the newest log entry by replaying it reversed.
    ///
    /// The replay is logged like any other move, so the merge cancels the
    /// entry out of the log. Returns `None` if a move is in progress or
    /// there is nothing to undo.
    pub fn undo_last(&mut self) -> Option<MoveEvent> {
        if self.state == SessionState::MoveInProgress {
            return None;
        }
        let last = self.log.last()?;
        log::debug!("undoing {last}");
        Some(self.play(last.reversed(), self.config.undo_step_duration))
    }

    /// Undoes every log entry, newest first, without pacing. Returns the
    /// number of entries undone: exactly the log length, or 0 if a move
    /// is in progress.
    pub fn undo_all(&mut self) -> usize {
        let mut undone = 0;
        while self.undo_last().is_some() {
            self.complete_move();
            undone += 1;
        }
        log::debug!("undid {undone} moves");
        undone
    }

    /// Replaces the move log with a prepared sequence whose undo replays
    /// a known path, such as the recorded scramble.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MoveInProgress`] if a move is in progress,
    /// [`GameError::SolutionZeroReps`] if an entry has a zero repetition
    /// count, or [`GameError::SolutionSharedAxis`] if two adjacent entries
    /// share an axis and would merge instead of undoing separately.
    pub fn install_solution(&mut self, moves: Vec<Move>) -> Result<(), GameError> {
        if self.state == SessionState::MoveInProgress {
            return Err(GameError::MoveInProgress);
        }
        for (index, mv) in moves.iter().enumerate() {
            if mv.reps() == 0 {
                return Err(GameError::SolutionZeroReps { index });
            }
            if index > 0 && moves[index - 1].axis() == mv.axis() {
                return Err(GameError::SolutionSharedAxis { index });
            }
        }
        log::debug!("installing a {} move log", moves.len());
        self.log.install(moves);
        Ok(())
    }

    /// Solves the puzzle: undoes everything the player did, then replays
    /// the recorded scramble backwards. Consumes the stored solution.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MoveInProgress`] if the previous move has not
    /// been completed.
    pub fn solve(&mut self) -> Result<(), GameError> {
        if self.state == SessionState::MoveInProgress {
            return Err(GameError::MoveInProgress);
        }
        self.undo_all();
        let solution = mem::take(&mut self.solution);
        log::debug!("unscrambling through {} recorded moves", solution.len());
        self.install_solution(solution)?;
        self.undo_all();
        Ok(())
    }

    /// Classifies every piece and reports whether the board is solved.
    pub fn is_solved(&mut self) -> bool {
        check_solve(&mut self.board)
    }

    /// Replaces the current puzzle with a freshly generated one,
    /// discarding the log and any in-progress move.
    pub fn reset(&mut self, puzzle: GeneratedPuzzle) {
        let GeneratedPuzzle {
            board,
            solution,
            seed: _,
        } = puzzle;
        self.board = board;
        self.moves_to_solve = solution.len();
        self.solution = solution;
        self.log.clear();
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use ringlace_generator::{GeneratorConfig, PuzzleGenerator};

    use super::*;

    fn session() -> Session {
        let generator = PuzzleGenerator::new(GeneratorConfig::default());
        Session::new(generator.generate_with_seed(11))
    }

    #[test]
    fn test_requests_are_gated_until_completed() {
        let mut session = session();
        let board = session.board().clone();

        let event = session
            .request_spin(Ring::new(1), SpinDir::Clockwise)
            .unwrap();
        assert_eq!(event.mv, Move::spin(Ring::new(1), SpinDir::Clockwise, 1));
        assert_eq!(event.step_duration, SessionConfig::DEFAULT_STEP_DURATION);
        assert_eq!(session.state(), SessionState::MoveInProgress);
        let after_spin = session.board().clone();
        assert_ne!(after_spin, board);

        // Further requests and undo are silently ignored while gated.
        assert!(session.request_shift(Column::C0, ShiftDir::Up).is_none());
        assert!(session.undo_last().is_none());
        assert_eq!(session.board(), &after_spin);
        assert_eq!(session.log().len(), 1);

        session.complete_move();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.request_shift(Column::C0, ShiftDir::Up).is_some());
    }

    #[test]
    #[should_panic(expected = "Invalid ring for this board: 9")]
    fn test_spin_outside_board_panics() {
        let mut session = session();
        let _ = session.request_spin(Ring::new(9), SpinDir::Clockwise);
    }

    #[test]
    fn test_undo_restores_board_and_cancels_log_entry() {
        let mut session = session();
        let before = session.board().clone();

        session.request_shift(Column::C2, ShiftDir::Down).unwrap();
        session.complete_move();
        assert_eq!(session.log().len(), 1);

        let event = session.undo_last().unwrap();
        assert_eq!(event.mv, Move::shift(Column::C2, ShiftDir::Up, 1));
        assert_eq!(
            event.step_duration,
            SessionConfig::DEFAULT_UNDO_STEP_DURATION
        );
        session.complete_move();

        assert!(session.log().is_empty());
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_undo_on_empty_log_is_a_noop() {
        let mut session = session();
        assert!(session.undo_last().is_none());
        assert_eq!(session.undo_all(), 0);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_opposite_move_is_its_own_undo() {
        let mut session = session();
        session
            .request_spin(Ring::new(2), SpinDir::Clockwise)
            .unwrap();
        session.complete_move();
        session
            .request_spin(Ring::new(2), SpinDir::Counterclockwise)
            .unwrap();
        session.complete_move();

        assert!(session.log().is_empty());
    }

    #[test]
    fn test_undo_all_performs_one_step_per_entry() {
        let mut session = session();
        let before = session.board().clone();

        for _ in 0..3 {
            session
                .request_spin(Ring::new(1), SpinDir::Clockwise)
                .unwrap();
            session.complete_move();
        }
        session.request_shift(Column::C4, ShiftDir::Up).unwrap();
        session.complete_move();

        // Three merged spins plus the shift.
        assert_eq!(session.log().len(), 2);
        assert_eq!(session.undo_all(), 2);
        assert!(session.log().is_empty());
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_remaining_moves_can_go_negative() {
        let mut session = session();
        let target = i64::try_from(session.moves_to_solve()).unwrap();
        assert_eq!(session.remaining_moves(), target);

        // Alternate axes so nothing merges.
        for i in 0..target + 2 {
            let ring = Ring::new(u8::try_from(i % 2).unwrap() + 1);
            session.request_spin(ring, SpinDir::Clockwise).unwrap();
            session.complete_move();
        }
        assert_eq!(session.remaining_moves(), -2);
    }

    #[test]
    fn test_solve_restores_a_solved_board() {
        let mut session = session();
        assert!(!session.solution.is_empty());

        // Wander off the solution path first.
        session
            .request_spin(Ring::new(3), SpinDir::Clockwise)
            .unwrap();
        session.complete_move();
        session.request_shift(Column::C1, ShiftDir::Up).unwrap();
        session.complete_move();

        session.solve().unwrap();
        assert!(session.is_solved());
        assert!(session.log().is_empty());
        assert!(session.solution.is_empty());
    }

    #[test]
    fn test_solve_while_gated_is_an_error() {
        let mut session = session();
        session
            .request_spin(Ring::new(1), SpinDir::Clockwise)
            .unwrap();
        assert_eq!(session.solve(), Err(GameError::MoveInProgress));
    }

    #[test]
    fn test_player_can_unscramble_by_hand() {
        let generator = PuzzleGenerator::new(GeneratorConfig::default());
        let puzzle = generator.generate_with_seed(11);
        let plan = puzzle.moves_to_solve();
        let mut session = Session::new(puzzle);

        // Replay the solution one unit step per request; the repeated
        // steps of each move merge into a single log entry.
        for mv in &plan {
            for step in mv.steps() {
                match step {
                    Move::Spin { ring, dir, .. } => {
                        session.request_spin(ring, dir).unwrap();
                    }
                    Move::Shift { column, dir, .. } => {
                        session.request_shift(column, dir).unwrap();
                    }
                }
                session.complete_move();
            }
        }

        assert!(session.is_solved());
        assert_eq!(session.log().len(), plan.len());
        assert_eq!(session.remaining_moves(), 0);
    }

    #[test]
    fn test_install_solution_validates_entries() {
        let mut session = session();

        let shared_axis = vec![
            Move::spin(Ring::new(1), SpinDir::Clockwise, 1),
            Move::spin(Ring::new(1), SpinDir::Clockwise, 2),
        ];
        assert_eq!(
            session.install_solution(shared_axis),
            Err(GameError::SolutionSharedAxis { index: 1 })
        );

        let zero_reps = vec![Move::Spin {
            ring: Ring::new(1),
            dir: SpinDir::Clockwise,
            reps: 0,
        }];
        assert_eq!(
            session.install_solution(zero_reps),
            Err(GameError::SolutionZeroReps { index: 0 })
        );
    }

    #[test]
    fn test_reset_installs_a_new_puzzle() {
        let mut session = session();
        session
            .request_spin(Ring::new(1), SpinDir::Clockwise)
            .unwrap();

        let generator = PuzzleGenerator::new(GeneratorConfig::default());
        let puzzle = generator.generate_with_seed(99);
        session.reset(puzzle.clone());

        assert_eq!(session.board(), &puzzle.board);
        assert!(session.log().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.moves_to_solve(), puzzle.solution.len());
    }
}
