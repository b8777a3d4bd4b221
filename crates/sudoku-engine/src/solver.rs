use crate::{Board, BoardError};

/// Depth-first backtracking Sudoku solver.
///
/// Fills the first vacant cell (row-major scan) with the lowest legal
/// digit and recurses, undoing the placement when no completion follows.
/// Existing entries are treated as fixed clues and never re-validated;
/// use [`Solver::solve_checked`] to reject contradictory input first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Solve the board in place.
    ///
    /// Returns `true` with the board completely filled, or `false` with
    /// the board exactly as it was passed in. Clues are never altered.
    pub fn solve(&self, board: &mut Board) -> bool {
        let Some(pos) = board.first_vacant() else {
            return true;
        };

        for digit in 1..=9 {
            if board.is_safe(pos, digit) {
                board.set(pos, Some(digit));
                if self.solve(board) {
                    return true;
                }
                board.set(pos, None);
            }
        }

        false
    }

    /// Validate the clues, then solve.
    ///
    /// A board whose entries already break row, column, or box
    /// uniqueness is rejected with an error instead of producing an
    /// arbitrary completion.
    pub fn solve_checked(&self, board: &mut Board) -> Result<bool, BoardError> {
        board.validate()?;
        Ok(self.solve(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    fn assert_rule_valid(board: &Board) {
        for r in 0..9 {
            for c in 0..9 {
                let pos = Position::new(r, c);
                let digit = board.get(pos).expect("solved board has no vacancies");
                let mut probe = *board;
                probe.set(pos, None);
                assert!(
                    probe.is_safe(pos, digit),
                    "digit {digit} at ({r}, {c}) conflicts with its row, column, or box"
                );
            }
        }
    }

    #[test]
    fn test_solve_classic_puzzle() {
        let mut board = Board::from_string(CLASSIC).unwrap();
        let solver = Solver::new();

        assert!(solver.solve(&mut board));
        assert!(board.is_complete());
        assert_rule_valid(&board);
        assert_eq!(
            board.row_values(0),
            [
                Some(5),
                Some(3),
                Some(4),
                Some(6),
                Some(7),
                Some(8),
                Some(9),
                Some(1),
                Some(2)
            ]
        );
    }

    #[test]
    fn test_solve_preserves_clues() {
        let clues = Board::from_string(CLASSIC).unwrap();
        let mut board = clues;
        assert!(Solver::new().solve(&mut board));

        for r in 0..9 {
            for c in 0..9 {
                let pos = Position::new(r, c);
                if let Some(digit) = clues.get(pos) {
                    assert_eq!(board.get(pos), Some(digit));
                }
            }
        }
    }

    #[test]
    fn test_unsolvable_leaves_board_unchanged() {
        // Row 0 already holds 1-8 and column 8 holds a 9, so the single
        // vacancy at (0, 8) admits no digit at all.
        let mut board = Board::new();
        for c in 0..8 {
            board.set(Position::new(0, c), Some(c as u8 + 1));
        }
        board.set(Position::new(1, 8), Some(9));

        let before = board;
        assert!(!Solver::new().solve(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_conflicting_clues_fail_to_solve() {
        // The classic puzzle with a second 5 in row 0 has no completion.
        let mut board = Board::from_string(CLASSIC).unwrap();
        board.set(Position::new(0, 7), Some(5));

        let before = board;
        assert!(!Solver::new().solve(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_solve_is_idempotent_on_solved_board() {
        let mut board = Board::from_string(CLASSIC).unwrap();
        let solver = Solver::new();
        assert!(solver.solve(&mut board));

        let solved = board;
        assert!(solver.solve(&mut board));
        assert_eq!(board, solved);
    }

    #[test]
    fn test_solve_checked_rejects_bad_clues() {
        let mut board = Board::from_string(CLASSIC).unwrap();
        board.set(Position::new(0, 8), Some(5));

        let result = Solver::new().solve_checked(&mut board);
        assert_eq!(
            result,
            Err(crate::BoardError::DuplicateInRow { row: 0, digit: 5 })
        );
    }

    #[test]
    fn test_solve_checked_solves_valid_board() {
        let mut board = Board::from_string(CLASSIC).unwrap();
        assert_eq!(Solver::new().solve_checked(&mut board), Ok(true));
        assert!(board.is_complete());
    }

    #[test]
    fn test_solve_empty_board() {
        let mut board = Board::new();
        assert!(Solver::new().solve(&mut board));
        assert!(board.is_complete());
        assert_rule_valid(&board);
        // Lowest-digit-first search fills row 0 in order.
        assert_eq!(
            board.row_values(0),
            [
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                Some(8),
                Some(9)
            ]
        );
    }
}
