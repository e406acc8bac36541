//! Game session management for the ringlace puzzle.
//!
//! A [`Session`] wraps a generated puzzle and mediates everything the
//! player does to it: moves are requested one at a time and paced through
//! [`MoveEvent`]s, every accepted move lands in a merging [`MoveLog`], and
//! undo replays log entries in reverse. Because the scrambler records the
//! exact move sequence it applied, solving is just undoing: first the
//! player's log, then the installed scramble.
//!
//! # Examples
//!
//! ```
//! use ringlace_core::{Ring, SpinDir};
//! use ringlace_game::Session;
//! use ringlace_generator::{GeneratorConfig, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(GeneratorConfig::default());
//! let mut session = Session::new(generator.generate_with_seed(1));
//!
//! let event = session.request_spin(Ring::new(1), SpinDir::Clockwise).unwrap();
//! // ... pace the move through event.mv.steps() ...
//! assert_eq!(event.mv.steps().len(), 1);
//! session.complete_move();
//!
//! session.undo_last().unwrap();
//! session.complete_move();
//! assert!(session.log().is_empty());
//! ```

pub mod move_log;
pub mod session;

pub use self::{
    move_log::MoveLog,
    session::{GameError, MoveEvent, Session, SessionConfig, SessionState},
};
