//! Puzzle generation for the ringlace puzzle.
//!
//! A puzzle is produced in two stages. Placement builds a solved board
//! out of randomly chosen groupings (full radial columns and 2×2 squares
//! on the inner rings), then the scrambler applies a bounded random move
//! sequence and records it. Replaying the recorded sequence backwards,
//! with every direction inverted, is a solution.
//!
//! Generation is deterministic per seed, so a puzzle can be reproduced
//! from its [`GeneratedPuzzle::seed`] alone.
//!
//! # Examples
//!
//! ```
//! use ringlace_generator::{GeneratorConfig, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(GeneratorConfig::default());
//! let puzzle = generator.generate_with_seed(42);
//!
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(puzzle.board, again.board);
//! assert_eq!(puzzle.solution, again.solution);
//! ```

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use ringlace_core::{Angle, Board, Layout, Move};

mod placement;
mod scramble;

/// Bounds for puzzle generation.
///
/// # Examples
///
/// ```
/// use ringlace_core::Layout;
/// use ringlace_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::new(Layout::default(), 2, 5);
/// assert_eq!(config.max_sets(), 2);
/// assert_eq!(config.max_moves(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    layout: Layout,
    max_sets: u8,
    max_moves: u8,
}

impl GeneratorConfig {
    /// Default upper bound on the number of piece groups.
    pub const DEFAULT_MAX_SETS: u8 = 3;
    /// Default upper bound on the scramble length.
    pub const DEFAULT_MAX_MOVES: u8 = 3;

    /// Creates a generation config.
    ///
    /// # Panics
    ///
    /// Panics if `max_sets` or `max_moves` is zero, or if `max_sets`
    /// groups cannot be guaranteed to fit on the board. Every group
    /// claims at most two of the 12 angles, so placement terminates as
    /// long as `2 * max_sets` does not exceed the slot count.
    #[must_use]
    pub fn new(layout: Layout, max_sets: u8, max_moves: u8) -> Self {
        assert!(max_sets >= 1, "Invalid max sets: {max_sets}");
        assert!(
            u16::from(max_sets) * 2 <= u16::from(Angle::SLOTS),
            "Too many sets for the board: {max_sets}"
        );
        assert!(max_moves >= 1, "Invalid max moves: {max_moves}");
        Self {
            layout,
            max_sets,
            max_moves,
        }
    }

    /// Returns the board layout puzzles are generated for.
    #[must_use]
    pub const fn layout(self) -> Layout {
        self.layout
    }

    /// Returns the upper bound on the number of piece groups.
    #[must_use]
    pub const fn max_sets(self) -> u8 {
        self.max_sets
    }

    /// Returns the upper bound on the scramble length.
    #[must_use]
    pub const fn max_moves(self) -> u8 {
        self.max_moves
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(
            Layout::default(),
            Self::DEFAULT_MAX_SETS,
            Self::DEFAULT_MAX_MOVES,
        )
    }
}

/// A generated puzzle: the scrambled board and the recorded way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The scrambled board.
    pub board: Board,
    /// The scramble sequence, in the order it was applied.
    pub solution: Vec<Move>,
    /// The seed the puzzle was generated from.
    pub seed: u64,
}

impl GeneratedPuzzle {
    /// Returns the moves that solve the puzzle: the scramble sequence
    /// reversed, with each move's direction inverted.
    #[must_use]
    pub fn moves_to_solve(&self) -> Vec<Move> {
        self.solution.iter().rev().map(|mv| mv.reversed()).collect()
    }
}

/// Seeded puzzle generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the given bounds.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the generation config.
    #[must_use]
    pub const fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(rand::rng().random())
    }

    /// Generates the puzzle determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: u64) -> GeneratedPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let mut board = placement::build_layout(&mut rng, &self.config);
        let solution = scramble::scramble(&mut rng, &mut board, &self.config);
        GeneratedPuzzle {
            board,
            solution,
            seed,
        }
    }
}
