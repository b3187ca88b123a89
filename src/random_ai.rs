use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::agent::Agent;
use crate::board::{Board, Player};
use crate::error::AiError;
use crate::moves::Move;

/// An agent that selects uniformly at random from the playable columns
#[derive(Clone, Debug)]
pub struct RandomAi {
    player: Player,
    rng: StdRng,
}

impl RandomAi {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an agent with a reproducible sequence of choices
    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAi {
    fn choose_move(&mut self, board: &Board) -> Result<Move, AiError> {
        if board.is_game_over() {
            return Err(AiError::NoLegalMove(self.player));
        }
        let legal = board.legal_columns();
        let column = *legal
            .choose(&mut self.rng)
            .ok_or(AiError::NoLegalMove(self.player))?;
        let row = board
            .landing_row(column)
            .ok_or(AiError::NoLegalMove(self.player))?;
        Ok(Move::new(row, column))
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Random"
    }
}
