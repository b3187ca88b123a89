//! The game board and its placement and termination rules

use std::fmt;

use crate::error::{ConfigError, MoveError, RestoreError};
use crate::moves::Move;
use crate::{COLUMNS, IN_A_ROW, MAX_DIMENSION, MAX_IN_A_ROW, ROWS};

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opposing player
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// The 1-based player number
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The owner of the token in this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
            Cell::Empty => '.',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.to_cell()
    }
}

/// The size of the grid and the run length needed to win
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
    pub in_a_row: usize,
}

impl Dimensions {
    pub fn new(rows: usize, columns: usize, in_a_row: usize) -> Self {
        Self {
            rows,
            columns,
            in_a_row,
        }
    }

    /// The total number of cells on the grid
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Checks that a game can be played on a grid of this size
    ///
    /// Rows and columns must be between 1 and [`MAX_DIMENSION`], and the run
    /// length between 2 and [`MAX_IN_A_ROW`] and no longer than the grid is
    /// tall or wide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &(name, value) in [("rows", self.rows), ("columns", self.columns)].iter() {
            if value == 0 || value > MAX_DIMENSION {
                return Err(ConfigError::Dimension {
                    name,
                    value,
                    max: MAX_DIMENSION,
                });
            }
        }
        if self.in_a_row < 2 || self.in_a_row > MAX_IN_A_ROW {
            return Err(ConfigError::RunLength {
                in_a_row: self.in_a_row,
                max: MAX_IN_A_ROW,
            });
        }
        if self.in_a_row > self.rows && self.in_a_row > self.columns {
            return Err(ConfigError::Unwinnable {
                in_a_row: self.in_a_row,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(ROWS, COLUMNS, IN_A_ROW)
    }
}

// the four axes a run can lie along, as (row step, column step)
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A Connect 4 grid with turn, overflow and game-over bookkeeping
///
/// Row 0 is the top of the grid. Cloning a `Board` produces a fully
/// independent copy, which is how the search explores hypothetical
/// positions and how drivers keep history.
///
/// # Termination
/// Placing a token never ends the game by itself. The game-over flag and the
/// winner are only updated by [`Board::check_for_game_over`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    dimensions: Dimensions,
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
    turn: usize,
    last_move: Option<Move>,
    last_player: Option<Player>,
    overflow: bool,
    game_over: bool,
    winner: Option<Player>,
}

impl Board {
    /// Creates an empty board
    ///
    /// Any size is accepted. A grid without rows or columns has no playable
    /// column and is full from the start; see [`Dimensions::validate`] for
    /// the sizes games are played on.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Cell::Empty; dimensions.cells()],
            turn: 0,
            last_move: None,
            last_player: None,
            overflow: false,
            game_over: false,
            winner: None,
        }
    }

    /// Rebuilds a board from stored `(row, column, player)` tokens
    ///
    /// Tokens are written straight into the grid and the turn counter is
    /// advanced once per token. The last token listed becomes the last move.
    /// The game-over state is not evaluated; call
    /// [`Board::check_for_game_over`] afterwards if the stored game may be
    /// finished.
    pub fn from_tokens<I>(dimensions: Dimensions, tokens: I) -> Result<Self, RestoreError>
    where
        I: IntoIterator<Item = (usize, usize, Player)>,
    {
        let mut board = Self::new(dimensions);

        for (row, column, player) in tokens {
            if row >= dimensions.rows || column >= dimensions.columns {
                return Err(RestoreError::OutOfBounds {
                    row,
                    column,
                    rows: dimensions.rows,
                    columns: dimensions.columns,
                });
            }
            let index = board.index(row, column);
            if !board.cells[index].is_empty() {
                return Err(RestoreError::Duplicate { row, column });
            }
            board.cells[index] = player.to_cell();
            board.set_turn(board.turn() + 1);
            board.set_last_move(Some(Move::new(row, column)));
            board.set_last_player(Some(player));
        }

        // every token must rest on the bottom or on another token
        for row in 0..dimensions.rows.saturating_sub(1) {
            for column in 0..dimensions.columns {
                if !board.cell(row, column).is_empty() && board.cell(row + 1, column).is_empty() {
                    return Err(RestoreError::Floating { row, column });
                }
            }
        }

        Ok(board)
    }

    /// Lists every placed token as `(row, column, player)`, skipping empty cells
    pub fn tokens(&self) -> impl Iterator<Item = (usize, usize, Player)> + '_ {
        let columns = self.dimensions.columns;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.player().map(|p| (idx / columns, idx % columns, p)))
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    pub fn in_a_row(&self) -> usize {
        self.dimensions.in_a_row
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.dimensions.columns + column
    }

    /// Get the cell at a specific position
    ///
    /// # Panics
    /// Panics if the position is outside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    /// The raw grid, row by row from the top
    pub fn game_board(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.dimensions.columns.max(1))
    }

    /// Mutable access to the raw grid, laid out row-major from the top
    ///
    /// Writes through this bypass every board invariant. A caller that
    /// adds tokens this way must advance the turn counter itself with
    /// [`Board::set_turn`].
    pub fn game_board_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn set_turn(&mut self, turn: usize) {
        self.turn = turn;
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn set_last_move(&mut self, last_move: Option<Move>) {
        self.last_move = last_move;
    }

    pub fn last_player(&self) -> Option<Player> {
        self.last_player
    }

    pub fn set_last_player(&mut self, last_player: Option<Player>) {
        self.last_player = last_player;
    }

    /// The player due to move, given who moves first in this game
    pub fn next_player(&self, first: Player) -> Player {
        self.last_player.map_or(first, Player::other)
    }

    /// Whether the most recent placement attempt targeted a full column
    pub fn is_overflow(&self) -> bool {
        self.overflow
    }

    pub fn set_overflow(&mut self, overflow: bool) {
        self.overflow = overflow;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Sets or revokes the game-over flag. Revoking also clears the winner.
    pub fn set_game_over(&mut self, game_over: bool) {
        self.game_over = game_over;
        if !game_over {
            self.winner = None;
        }
    }

    /// The recorded winner, `None` while in progress or on a draw
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// A column is playable iff it is on the board and its top cell is empty
    pub fn playable(&self, column: usize) -> bool {
        column < self.dimensions.columns && self.dimensions.rows > 0 && self.cell(0, column).is_empty()
    }

    /// All playable columns in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.dimensions.columns)
            .filter(|&column| self.playable(column))
            .collect()
    }

    /// The row a token dropped into `column` would land in
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.dimensions.columns {
            return None;
        }
        (0..self.dimensions.rows)
            .rev()
            .find(|&row| self.cell(row, column).is_empty())
    }

    pub fn is_full(&self) -> bool {
        (0..self.dimensions.columns).all(|column| !self.playable(column))
    }

    /// Drops a token for `player` into `column`
    ///
    /// On success the token lands in the lowest empty row, the turn counter
    /// advances, the last move and player are updated and the overflow flag
    /// is cleared. A full column sets the overflow flag and leaves everything
    /// else untouched, so the caller can simply pick another column.
    pub fn make_move(&mut self, column: usize, player: Player) -> Result<Move, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if column >= self.dimensions.columns {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.dimensions.columns,
            });
        }
        let row = match self.landing_row(column) {
            Some(row) => row,
            None => {
                self.overflow = true;
                return Err(MoveError::ColumnFull(column));
            }
        };

        let index = self.index(row, column);
        self.cells[index] = player.to_cell();
        let placed = Move::new(row, column);
        self.last_move = Some(placed);
        self.last_player = Some(player);
        self.turn += 1;
        self.overflow = false;
        Ok(placed)
    }

    // count tokens equal to `cell` stepping away from (row, column), excluding the start
    fn count_direction(&self, row: usize, column: usize, d_row: isize, d_col: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + d_row;
        let mut c = column as isize + d_col;
        while r >= 0
            && c >= 0
            && (r as usize) < self.dimensions.rows
            && (c as usize) < self.dimensions.columns
            && self.cell(r as usize, c as usize) == cell
        {
            count += 1;
            r += d_row;
            c += d_col;
        }
        count
    }

    // whether a token of `cell` at (row, column) would sit in a winning run
    fn completes_run(&self, row: usize, column: usize, cell: Cell) -> bool {
        AXES.iter().any(|&(d_row, d_col)| {
            1 + self.count_direction(row, column, d_row, d_col, cell)
                + self.count_direction(row, column, -d_row, -d_col, cell)
                >= self.dimensions.in_a_row
        })
    }

    /// Whether the token at `position` is part of a winning run
    ///
    /// Positions outside the grid hold no token and never win.
    pub fn wins_at(&self, position: Move) -> bool {
        if position.row >= self.dimensions.rows || position.column >= self.dimensions.columns {
            return false;
        }
        let cell = self.cell(position.row, position.column);
        !cell.is_empty() && self.completes_run(position.row, position.column, cell)
    }

    /// Whether dropping a token for `player` into `column` would win the game
    pub fn is_winning_move(&self, column: usize, player: Player) -> bool {
        match self.landing_row(column) {
            Some(row) => self.completes_run(row, column, player.to_cell()),
            None => false,
        }
    }

    /// Finds a player with a winning run anywhere on the grid
    ///
    /// The last move is checked first, since on a board built only through
    /// [`Board::make_move`] it is the only token that can have completed a run.
    pub fn find_winner(&self) -> Option<Player> {
        if let Some(last_move) = self.last_move {
            if self.wins_at(last_move) {
                return self.cell(last_move.row, last_move.column).player();
            }
        }

        for row in 0..self.dimensions.rows {
            for column in 0..self.dimensions.columns {
                if self.wins_at(Move::new(row, column)) {
                    return self.cell(row, column).player();
                }
            }
        }
        None
    }

    /// Checks whether the game has ended, recording the result if it has
    ///
    /// A winning run sets the game-over flag and the winner. A full grid
    /// without a run sets the game-over flag with no winner. Otherwise the
    /// board is left unchanged and `false` is returned.
    pub fn check_for_game_over(&mut self) -> bool {
        if let Some(player) = self.find_winner() {
            self.game_over = true;
            self.winner = Some(player);
            return true;
        }
        if self.is_full() {
            self.game_over = true;
            self.winner = None;
            return true;
        }
        false
    }

    /// Whether the grid is full and nobody has won
    pub fn check_for_draw(&self) -> bool {
        self.is_full() && self.winner.is_none() && self.find_winner().is_none()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.game_board() {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        let labels: String = (1..=self.dimensions.columns)
            .map(|column| std::char::from_digit((column % 10) as u32, 10).unwrap_or(' '))
            .collect();
        write!(f, "{}", labels)
    }
}
