//! A Connect 4 engine with a depth-bounded minimax opponent
//!
//! The board is a column-gravity grid of configurable size. Two move
//! selection strategies are provided: an alpha-beta minimax search with a
//! window-counting heuristic, and a uniform random chooser.
//!
//! # Basic Usage
//!
//! ```
//! use minimax_connect4::{Board, Dimensions, MinimaxAi, Player, Agent};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new(Dimensions::default());
//! for &column in &[0, 0, 1, 1, 2, 2] {
//!     let player = board.next_player(Player::One);
//!     board.make_move(column, player)?;
//! }
//!
//! let mut ai = MinimaxAi::new(4, Player::One);
//! let best = ai.choose_move(&board)?;
//!
//! assert_eq!(best.column, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod moves;

pub mod evaluator;

pub mod minimax;

pub mod random_ai;

pub mod agent;

pub mod config;

pub mod error;

pub mod session;


pub use agent::Agent;
pub use board::{Board, Cell, Dimensions, Player};
pub use config::{Controller, GameConfig};
pub use error::{AiError, ConfigError, MoveError, RestoreError, SessionError};
pub use minimax::MinimaxAi;
pub use moves::Move;
pub use random_ai::RandomAi;
pub use session::{GameSession, Outcome};

/// The default number of rows on the game board
pub const ROWS: usize = 6;

/// The default number of columns on the game board
pub const COLUMNS: usize = 7;

/// The default run length needed to win
pub const IN_A_ROW: usize = 4;

/// The largest supported number of rows or columns
pub const MAX_DIMENSION: usize = 16;

/// The largest supported winning run length
pub const MAX_IN_A_ROW: usize = 6;

// the default game must be winnable and within the evaluator's score range
const_assert!(IN_A_ROW <= ROWS || IN_A_ROW <= COLUMNS);
const_assert!(ROWS <= MAX_DIMENSION && COLUMNS <= MAX_DIMENSION);
const_assert!(IN_A_ROW <= MAX_IN_A_ROW);
