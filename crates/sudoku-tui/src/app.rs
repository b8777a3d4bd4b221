use crossterm::event::KeyCode;
use rand::Rng;
use sudoku_engine::{Board, BoardError, Position, Randomizer, Solver, SIZE};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Status line under the grid, the original app's result label
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// The main application state
pub struct App {
    /// The current board
    pub board: Board,
    /// Cells that belong to the puzzle and cannot be edited
    given: [[bool; SIZE]; SIZE],
    /// Currently selected cell position
    pub cursor: Position,
    /// Feedback from the last action
    pub message: Option<Message>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Start with an empty, fully editable board
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            given: [[false; SIZE]; SIZE],
            cursor: Position::new(4, 4),
            message: None,
        }
    }

    /// Start from an 81-character puzzle string; its digits become
    /// read-only clues. Contradictory clues are rejected up front.
    pub fn with_puzzle(puzzle: &str) -> Result<Self, BoardError> {
        let board = Board::from_string(puzzle)?;
        board.validate()?;

        let mut app = Self::new();
        app.board = board;
        app.mark_filled_as_given();
        Ok(app)
    }

    /// Whether the cell is a read-only clue
    pub fn is_given(&self, pos: Position) -> bool {
        self.given[pos.row][pos.col]
    }

    pub fn handle_key(&mut self, code: KeyCode) -> AppAction {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Char(ch @ '1'..='9') => self.enter_digit(ch as u8 - b'0'),
            KeyCode::Char('0') | KeyCode::Char(' ') | KeyCode::Backspace | KeyCode::Delete => {
                self.erase()
            }
            KeyCode::Char('s') => self.solve(),
            KeyCode::Char('r') => self.randomize(&mut rand::thread_rng()),
            KeyCode::Char('c') => self.clear(),
            _ => {}
        }
        AppAction::Continue
    }

    fn move_cursor(&mut self, dr: isize, dc: isize) {
        let row = self.cursor.row as isize + dr;
        let col = self.cursor.col as isize + dc;
        self.cursor = Position::new(
            row.clamp(0, SIZE as isize - 1) as usize,
            col.clamp(0, SIZE as isize - 1) as usize,
        );
    }

    fn enter_digit(&mut self, digit: u8) {
        if self.is_given(self.cursor) {
            self.message = Some(Message::error("That cell is part of the puzzle."));
            return;
        }
        self.board.set(self.cursor, Some(digit));
        self.message = None;
    }

    fn erase(&mut self) {
        if self.is_given(self.cursor) {
            self.message = Some(Message::error("That cell is part of the puzzle."));
            return;
        }
        self.board.set(self.cursor, None);
        self.message = None;
    }

    /// Solve the board in place, reporting the outcome on the status line
    pub fn solve(&mut self) {
        if let Err(e) = self.board.validate() {
            self.message = Some(Message::error(format!("Cannot solve: {}", e)));
            return;
        }

        if Solver::new().solve(&mut self.board) {
            self.message = Some(Message::info("Sudoku solved!"));
        } else {
            self.message = Some(Message::error("No solution exists."));
        }
    }

    /// Clear the board, then greedily fill it with randomly ordered
    /// digits. Filled cells become read-only; the fill may leave gaps.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clear();
        Randomizer::new().fill(&mut self.board, rng);
        self.mark_filled_as_given();
        self.message = Some(Message::info(format!(
            "Random board: {} of 81 cells filled.",
            self.board.given_count()
        )));
    }

    /// Erase everything and make every cell editable again
    pub fn clear(&mut self) {
        self.board.clear();
        self.given = [[false; SIZE]; SIZE];
        self.message = None;
    }

    fn mark_filled_as_given(&mut self) {
        for r in 0..SIZE {
            for c in 0..SIZE {
                self.given[r][c] = self.board.get(Position::new(r, c)).is_some();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_cursor_clamps_to_grid() {
        let mut app = App::new();
        assert_eq!(app.cursor, Position::new(4, 4));

        for _ in 0..10 {
            app.handle_key(KeyCode::Up);
        }
        assert_eq!(app.cursor, Position::new(0, 4));

        for _ in 0..10 {
            app.handle_key(KeyCode::Char('l'));
        }
        assert_eq!(app.cursor, Position::new(0, 8));
    }

    #[test]
    fn test_digit_entry_and_erase() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('7'));
        assert_eq!(app.board.get(app.cursor), Some(7));

        app.handle_key(KeyCode::Char('0'));
        assert_eq!(app.board.get(app.cursor), None);
    }

    #[test]
    fn test_given_cells_are_read_only() {
        let mut app = App::with_puzzle(CLASSIC).unwrap();
        app.cursor = Position::new(0, 0);
        assert!(app.is_given(app.cursor));

        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.board.get(app.cursor), Some(5));
        assert!(app.message.as_ref().is_some_and(|m| m.is_error));
    }

    #[test]
    fn test_with_puzzle_rejects_conflicting_clues() {
        let mut bad = CLASSIC.to_string();
        // A second 5 in row 0.
        bad.replace_range(8..9, "5");
        assert!(App::with_puzzle(&bad).is_err());
    }

    #[test]
    fn test_solve_reports_success() {
        let mut app = App::with_puzzle(CLASSIC).unwrap();
        app.solve();
        assert!(app.board.is_complete());
        assert!(app.message.as_ref().is_some_and(|m| !m.is_error));
    }

    #[test]
    fn test_solve_reports_conflicts_instead_of_searching() {
        let mut app = App::new();
        app.board.set(Position::new(0, 0), Some(5));
        app.board.set(Position::new(0, 3), Some(5));

        app.solve();
        assert!(app.message.as_ref().is_some_and(|m| m.is_error));
        // The board is untouched.
        assert_eq!(app.board.given_count(), 2);
    }

    #[test]
    fn test_randomize_marks_cells_given_and_clear_resets() {
        let mut app = App::new();
        app.randomize(&mut StdRng::seed_from_u64(42));

        let filled = app.board.given_count();
        assert!(filled > 0);
        for r in 0..SIZE {
            for c in 0..SIZE {
                let pos = Position::new(r, c);
                assert_eq!(app.is_given(pos), app.board.get(pos).is_some());
            }
        }

        app.clear();
        assert!(app.board.is_empty());
        assert!(!app.is_given(Position::new(0, 0)));
    }
}
