use crate::board::{Board, Player};
use crate::error::AiError;
use crate::moves::Move;

/// A computer player that picks a move for its assigned side
///
/// Agents only borrow the board for the duration of a call and never
/// mutate it. The returned move is applied by the caller.
pub trait Agent {
    /// Choose a move for [`Agent::player`] on the given board
    fn choose_move(&mut self, board: &Board) -> Result<Move, AiError>;

    /// The side this agent plays for
    fn player(&self) -> Player;

    /// Return the agent's display name
    fn name(&self) -> &str;
}
