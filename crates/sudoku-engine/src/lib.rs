//! Sudoku engine: a 9x9 board with constraint queries, an exhaustive
//! backtracking solver, and a greedy randomized filler.
//!
//! The board is the only state; [`Solver::solve`] and
//! [`Randomizer::fill`] borrow it mutably for the duration of one call
//! and hand it back. Presentation lives in a separate crate.

mod board;
mod random;
mod solver;

pub use board::{Board, BoardError, Position, BOX_SIZE, SIZE};
pub use random::Randomizer;
pub use solver::Solver;
