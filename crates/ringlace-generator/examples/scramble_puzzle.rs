//! Example demonstrating ringlace puzzle generation.
//!
//! Generates a puzzle, prints the scrambled board as a ring × angle grid
//! together with the recorded scramble, then verifies that replaying the
//! scramble backwards restores a solved layout.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scramble_puzzle
//! ```
//!
//! Reproduce a specific puzzle:
//!
//! ```sh
//! cargo run --example scramble_puzzle -- --seed 42
//! ```
//!
//! Control the board size and generation bounds:
//!
//! ```sh
//! cargo run --example scramble_puzzle -- --rings 6 --max-sets 4 --max-moves 8
//! ```

use clap::Parser;
use ringlace_core::{Angle, Board, Cell, Layout, Ring};
use ringlace_generator::{GeneratorConfig, PuzzleGenerator};
use ringlace_solver::check_solve;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to reproduce a puzzle from. Random if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of rings on the board.
    #[arg(long, value_name = "COUNT", default_value_t = Layout::DEFAULT_RING_COUNT)]
    rings: u8,

    /// Maximum number of piece groups.
    #[arg(long, value_name = "COUNT", default_value_t = GeneratorConfig::DEFAULT_MAX_SETS)]
    max_sets: u8,

    /// Maximum number of scramble moves.
    #[arg(long, value_name = "COUNT", default_value_t = GeneratorConfig::DEFAULT_MAX_MOVES)]
    max_moves: u8,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = GeneratorConfig::new(Layout::new(args.rings), args.max_sets, args.max_moves);
    let generator = PuzzleGenerator::new(config);
    let mut puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Board:");
    print_board(&puzzle.board);
    println!();

    println!("Scramble:");
    for mv in &puzzle.solution {
        println!("  {mv}");
    }
    println!();

    println!("Solution:");
    for mv in puzzle.moves_to_solve() {
        println!("  {mv}");
        puzzle.board.apply(mv);
    }
    println!();

    assert!(check_solve(&mut puzzle.board));
    println!("Verified: solution restores a solved layout.");
}

/// Prints the board as a grid, angles across and rings down, with each
/// occupied cell showing its piece's group number.
fn print_board(board: &Board) {
    print!("  ring ");
    for angle in Angle::ALL {
        print!("{angle:>3}");
    }
    println!();
    for ring in 1..=board.layout().ring_count() {
        print!("  {ring:>4} ");
        for angle in Angle::ALL {
            match board.piece_at(Cell::new(Ring::new(ring), angle)) {
                Some(piece) => print!("{:>3}", piece.group()),
                None => print!("  ."),
            }
        }
        println!();
    }
}
