use crate::{Board, Position, SIZE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Greedy randomized board filler.
///
/// Visits every cell in row-major order and places the first digit of a
/// freshly shuffled candidate list that keeps the row, column, and box
/// duplicate-free. There is no backtracking: a cell whose nine
/// candidates all conflict is left vacant and the scan moves on, so the
/// result is locally consistent but not guaranteed complete. Callers
/// that need a full board retry with a fresh shuffle order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Randomizer;

impl Randomizer {
    /// Create a new randomizer
    pub fn new() -> Self {
        Self
    }

    /// Fill an empty board with randomly ordered digits.
    ///
    /// The board must be empty on entry; clear it first. Randomness
    /// comes from the caller so tests can seed it.
    pub fn fill<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) {
        let mut candidates: [u8; SIZE] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

        for r in 0..SIZE {
            for c in 0..SIZE {
                candidates.shuffle(rng);
                let pos = Position::new(r, c);
                for &digit in &candidates {
                    if board.is_safe(pos, digit) {
                        board.set(pos, Some(digit));
                        break;
                    }
                }
            }
        }
    }
}
