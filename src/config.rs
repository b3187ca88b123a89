//! Game setup: board size, who moves first and who controls each side

use std::time::Duration;

use crate::agent::Agent;
use crate::board::{Dimensions, Player};
use crate::error::ConfigError;
use crate::minimax::MinimaxAi;
use crate::random_ai::RandomAi;

/// Who chooses the moves for one side of the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Controller {
    Human,
    Minimax {
        depth: usize,
        time_limit: Option<Duration>,
    },
    Random {
        seed: Option<u64>,
    },
}

impl Controller {
    pub fn minimax(depth: usize) -> Self {
        Controller::Minimax {
            depth,
            time_limit: None,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Controller::Human)
    }

    /// Builds the agent for `player`, or `None` for a human seat
    pub fn agent(&self, player: Player) -> Option<Box<dyn Agent>> {
        match *self {
            Controller::Human => None,
            Controller::Minimax { depth, time_limit } => {
                let ai = MinimaxAi::new(depth, player);
                Some(Box::new(match time_limit {
                    Some(limit) => ai.with_time_limit(limit),
                    None => ai,
                }))
            }
            Controller::Random { seed: Some(seed) } => Some(Box::new(RandomAi::with_seed(player, seed))),
            Controller::Random { seed: None } => Some(Box::new(RandomAi::new(player))),
        }
    }
}

/// Everything needed to start a game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    pub dimensions: Dimensions,
    pub starting_player: Player,
    pub player_one: Controller,
    pub player_two: Controller,
}

impl GameConfig {
    pub fn new(player_one: Controller, player_two: Controller) -> Self {
        Self {
            dimensions: Dimensions::default(),
            starting_player: Player::One,
            player_one,
            player_two,
        }
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_starting_player(mut self, starting_player: Player) -> Self {
        self.starting_player = starting_player;
        self
    }

    pub fn controller(&self, player: Player) -> Controller {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Whether the game can be played without any human input
    pub fn is_automatic(&self) -> bool {
        !self.player_one.is_human() && !self.player_two.is_human()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions.validate()?;

        for &player in [Player::One, Player::Two].iter() {
            if let Controller::Minimax { depth: 0, .. } = self.controller(player) {
                return Err(ConfigError::Depth(player));
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// A human playing first against a depth 4 minimax opponent
    fn default() -> Self {
        Self::new(Controller::Human, Controller::minimax(4))
    }
}
