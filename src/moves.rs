use std::fmt;

/// The cell a token landed in, or would land in if played
///
/// The column is always the caller's choice; the row is decided by gravity
/// when the token is placed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Move {
    // displayed 1-indexed to match the column labels of the board
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.column + 1)
    }
}
