use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 9;
/// Side length of a 3x3 box.
pub const BOX_SIZE: usize = 3;

/// A cell coordinate, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Top-left corner of the 3x3 box containing this position
    pub fn box_origin(&self) -> Position {
        Position::new(
            BOX_SIZE * (self.row / BOX_SIZE),
            BOX_SIZE * (self.col / BOX_SIZE),
        )
    }
}

/// Errors from constructing or validating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("board string must be 81 characters, got {0}")]
    BadLength(usize),
    #[error("invalid character {ch:?} at index {index}")]
    BadChar { index: usize, ch: char },
    #[error("digit {digit} at row {row}, column {col} is outside 1-9")]
    DigitOutOfRange { row: usize, col: usize, digit: u8 },
    #[error("digit {digit} appears more than once in row {row}")]
    DuplicateInRow { row: usize, digit: u8 },
    #[error("digit {digit} appears more than once in column {col}")]
    DuplicateInColumn { col: usize, digit: u8 },
    #[error("digit {digit} appears more than once in the box at row {row}, column {col}")]
    DuplicateInBox { row: usize, col: usize, digit: u8 },
}

/// A 9x9 Sudoku board. Each cell holds a digit 1-9 or is vacant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<u8>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// Create a board from a 9x9 grid of optional digits.
    ///
    /// Digit range is checked; clue uniqueness is not (use [`Board::validate`]).
    pub fn from_rows(rows: [[Option<u8>; SIZE]; SIZE]) -> Result<Self, BoardError> {
        for (row, row_cells) in rows.iter().enumerate() {
            for (col, &cell) in row_cells.iter().enumerate() {
                if let Some(digit) = cell {
                    if !(1..=9).contains(&digit) {
                        return Err(BoardError::DigitOutOfRange { row, col, digit });
                    }
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Parse a board from an 81-character string, row by row.
    ///
    /// `'1'`-`'9'` are digits; `'0'` and `'.'` mark vacant cells.
    pub fn from_string(s: &str) -> Result<Self, BoardError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != SIZE * SIZE {
            return Err(BoardError::BadLength(chars.len()));
        }

        let mut board = Self::new();
        for (index, &ch) in chars.iter().enumerate() {
            let value = match ch {
                '0' | '.' => None,
                '1'..='9' => Some(ch as u8 - b'0'),
                _ => return Err(BoardError::BadChar { index, ch }),
            };
            board.cells[index / SIZE][index % SIZE] = value;
        }
        Ok(board)
    }

    /// The board as an 81-character string, `'0'` for vacant cells
    pub fn to_string_compact(&self) -> String {
        let mut s = String::with_capacity(SIZE * SIZE);
        for row in &self.cells {
            for cell in row {
                s.push(match cell {
                    Some(d) => (b'0' + d) as char,
                    None => '0',
                });
            }
        }
        s
    }

    /// Value at a position
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col]
    }

    /// Set or erase the value at a position.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `Some(d)` with `d` outside 1-9.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        if let Some(digit) = value {
            assert!((1..=9).contains(&digit), "digit {digit} outside 1-9");
        }
        self.cells[pos.row][pos.col] = value;
    }

    /// Erase every cell
    pub fn clear(&mut self) {
        self.cells = [[None; SIZE]; SIZE];
    }

    /// The full grid, for display or export
    pub fn rows(&self) -> &[[Option<u8>; SIZE]; SIZE] {
        &self.cells
    }

    /// Contents of row `r`, left to right
    pub fn row_values(&self, r: usize) -> [Option<u8>; SIZE] {
        self.cells[r]
    }

    /// Contents of column `c`, top to bottom
    pub fn col_values(&self, c: usize) -> [Option<u8>; SIZE] {
        let mut values = [None; SIZE];
        for (r, value) in values.iter_mut().enumerate() {
            *value = self.cells[r][c];
        }
        values
    }

    /// Contents of the 3x3 box containing `pos`, row-major within the box
    pub fn box_values(&self, pos: Position) -> [Option<u8>; SIZE] {
        let origin = pos.box_origin();
        let mut values = [None; SIZE];
        for dr in 0..BOX_SIZE {
            for dc in 0..BOX_SIZE {
                values[dr * BOX_SIZE + dc] = self.cells[origin.row + dr][origin.col + dc];
            }
        }
        values
    }

    /// First vacant cell in row-major scan order, or `None` if the board
    /// is full. The scan order determines the solver's search trajectory.
    pub fn first_vacant(&self) -> Option<Position> {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    return Some(Position::new(r, c));
                }
            }
        }
        None
    }

    /// Whether placing `digit` at `pos` would keep the row, column, and
    /// box free of duplicates. Does not look at the cell itself.
    pub fn is_safe(&self, pos: Position, digit: u8) -> bool {
        let digit = Some(digit);
        !self.row_values(pos.row).contains(&digit)
            && !self.col_values(pos.col).contains(&digit)
            && !self.box_values(pos).contains(&digit)
    }

    /// Whether every cell holds a digit
    pub fn is_complete(&self) -> bool {
        self.first_vacant().is_none()
    }

    /// Whether no cell holds a digit
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_none())
    }

    /// Number of filled cells
    pub fn given_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Number of vacant cells
    pub fn empty_count(&self) -> usize {
        SIZE * SIZE - self.given_count()
    }

    /// Check that no digit appears twice in any row, column, or box.
    ///
    /// The solver itself never re-checks existing entries; call this
    /// before solving to reject contradictory input up front.
    pub fn validate(&self) -> Result<(), BoardError> {
        for r in 0..SIZE {
            if let Some(digit) = duplicate_in(&self.row_values(r)) {
                return Err(BoardError::DuplicateInRow { row: r, digit });
            }
        }
        for c in 0..SIZE {
            if let Some(digit) = duplicate_in(&self.col_values(c)) {
                return Err(BoardError::DuplicateInColumn { col: c, digit });
            }
        }
        for br in 0..BOX_SIZE {
            for bc in 0..BOX_SIZE {
                let origin = Position::new(br * BOX_SIZE, bc * BOX_SIZE);
                if let Some(digit) = duplicate_in(&self.box_values(origin)) {
                    return Err(BoardError::DuplicateInBox {
                        row: origin.row,
                        col: origin.col,
                        digit,
                    });
                }
            }
        }
        Ok(())
    }
}

/// First digit occurring more than once among the filled cells of a unit
fn duplicate_in(values: &[Option<u8>; SIZE]) -> Option<u8> {
    let mut seen = [false; SIZE + 1];
    for &value in values {
        if let Some(digit) = value {
            if seen[digit as usize] {
                return Some(digit);
            }
            seen[digit as usize] = true;
        }
    }
    None
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 && r % BOX_SIZE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 && c % BOX_SIZE == 0 {
                    write!(f, "| ")?;
                }
                match cell {
                    Some(d) => write!(f, "{} ", d)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
