//! A single game between two controllers
//!
//! The session owns the live [`Board`] for one game. Agents borrow it only
//! while choosing a move; the session applies the move and runs the
//! termination check after every placement.

use log::{debug, info};

use crate::agent::Agent;
use crate::board::{Board, Player};
use crate::config::GameConfig;
use crate::error::{MoveError, SessionError};
use crate::moves::Move;

/// The result of a finished game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

pub struct GameSession {
    config: GameConfig,
    board: Board,
    player_one: Option<Box<dyn Agent>>,
    player_two: Option<Box<dyn Agent>>,
}

impl GameSession {
    /// Validates the configuration and sets up a fresh board
    pub fn new(config: GameConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.dimensions),
            player_one: config.player_one.agent(Player::One),
            player_two: config.player_two.agent(Player::Two),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player due to move next
    pub fn current_player(&self) -> Player {
        self.board.next_player(self.config.starting_player)
    }

    pub fn is_human_turn(&self) -> bool {
        self.config.controller(self.current_player()).is_human()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.board.is_game_over() {
            return None;
        }
        Some(self.board.winner().map_or(Outcome::Draw, Outcome::Winner))
    }

    /// Plays a column chosen by a human for the current player
    ///
    /// A full column is reported as [`MoveError::ColumnFull`] and leaves the
    /// game as it was, with the board's overflow flag set.
    pub fn play_column(&mut self, column: usize) -> Result<Move, SessionError> {
        let player = self.current_player();
        if !self.config.controller(player).is_human() {
            return Err(SessionError::NotHumanTurn(player));
        }
        self.apply(column, player)
    }

    /// Asks the current player's agent for a move and plays it
    pub fn play_ai_turn(&mut self) -> Result<Move, SessionError> {
        if self.board.is_game_over() {
            return Err(MoveError::GameOver.into());
        }
        let player = self.current_player();
        let agent = match player {
            Player::One => self.player_one.as_mut(),
            Player::Two => self.player_two.as_mut(),
        };
        let chosen = match agent {
            Some(agent) => agent.choose_move(&self.board)?,
            None => return Err(SessionError::HumanTurn(player)),
        };
        self.apply(chosen.column, player)
    }

    /// Plays computer turns until the game ends
    pub fn play_out(&mut self) -> Result<Outcome, SessionError> {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            self.play_ai_turn()?;
        }
    }

    /// A copy of the current board, for keeping history outside the session
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Replaces the live board with an earlier snapshot
    ///
    /// A snapshot taken before the game ended carries no game-over state,
    /// so restoring it resumes play.
    pub fn restore(&mut self, board: Board) {
        self.board = board;
    }

    fn apply(&mut self, column: usize, player: Player) -> Result<Move, SessionError> {
        let placed = self.board.make_move(column, player)?;
        debug!("Turn {}: {} played {}", self.board.turn(), player, placed);

        if self.board.check_for_game_over() {
            match self.board.winner() {
                Some(winner) => info!("{} wins after {} turns", winner, self.board.turn()),
                None => info!("Draw after {} turns", self.board.turn()),
            }
        }
        Ok(placed)
    }
}
