use crate::board::Player;

/// A placement that the board refused. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move, column {0} full")]
    ColumnFull(usize),

    #[error("invalid move, column {column} out of range, the board has {columns} columns")]
    InvalidColumn { column: usize, columns: usize },

    #[error("invalid move, the game is already over")]
    GameOver,
}

/// Errors raised when an agent is asked to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("no legal move available for {0}")]
    NoLegalMove(Player),
}

/// Errors raised while rebuilding a board from stored tokens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RestoreError {
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("cell ({row}, {column}) is listed more than once")]
    Duplicate { row: usize, column: usize },

    #[error("token at ({row}, {column}) has an empty cell below it")]
    Floating { row: usize, column: usize },
}

/// Errors raised when validating a game configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimension {name} = {value} must be between 1 and {max}")]
    Dimension {
        name: &'static str,
        value: usize,
        max: usize,
    },

    #[error("run length {in_a_row} must be between 2 and {max}")]
    RunLength { in_a_row: usize, max: usize },

    #[error("run length {in_a_row} does not fit on a {rows}x{columns} board")]
    Unwinnable {
        in_a_row: usize,
        rows: usize,
        columns: usize,
    },

    #[error("search depth for {0} must be at least 1")]
    Depth(Player),
}

/// Errors raised while driving a game session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Ai(#[from] AiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0} is human controlled and must choose a column")]
    HumanTurn(Player),

    #[error("{0} is computer controlled")]
    NotHumanTurn(Player),
}
