//! A depth-bounded minimax agent with alpha-beta pruning

use log::{debug, trace, warn};

use std::time::{Duration, Instant};

use crate::agent::Agent;
use crate::board::{Board, Player};
use crate::error::AiError;
use crate::evaluator::{heuristic, WIN_SCORE};
use crate::moves::Move;

// bound for the search window, safe to negate
const INFINITY: i32 = i32::MAX;

// how many nodes are searched between clock checks
const CLOCK_INTERVAL: usize = 1024;

/// Raised inside the search when the wall-clock budget runs out
struct Timeout;

/// Returns the columns ordered from the middle outwards, as the middle
/// columns are often better moves. Of two columns equally far from the
/// middle, the left one comes first, so the order is defined for even
/// widths too.
pub fn move_order(columns: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..columns).collect();
    order.sort_by_key(|&column| (2 * column as isize - (columns as isize - 1)).abs());
    order
}

/// An agent that searches the game tree to a fixed depth
///
/// # Position Scoring
/// Scores are from the point of view of the player to move. A position where
/// a player has just won scores `WIN_SCORE` plus the search depth left when
/// the win was found, so quicker wins score higher and slower losses are
/// preferred. If the player to move at a depth cutoff can win immediately,
/// the leaf scores `WIN_SCORE`. Other cutoff positions are scored with
/// [`heuristic`]. Full boards score 0.
///
/// # Move Ordering
/// Columns are explored in [`move_order`], and of several equally scored
/// moves the first explored is kept, so the chosen move is deterministic.
#[derive(Clone, Debug)]
pub struct MinimaxAi {
    depth: usize,
    player: Player,
    time_limit: Option<Duration>,

    /// The number of nodes searched by the last call (for diagnostics only)
    pub node_count: usize,
}

impl MinimaxAi {
    /// Creates an agent that searches `depth` plies ahead for `player`
    ///
    /// A depth of 0 is treated as 1.
    pub fn new(depth: usize, player: Player) -> Self {
        Self {
            depth: depth.max(1),
            player,
            time_limit: None,
            node_count: 0,
        }
    }

    /// Bounds the wall-clock time of each search
    ///
    /// With a time limit the search deepens one ply at a time up to the
    /// maximum depth and answers with the deepest iteration that finished.
    /// The depth 1 iteration always finishes.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Searches the position and returns the best move with its score
    ///
    /// The board is copied first, so the caller's board is never touched.
    pub fn search(&mut self, board: &Board) -> Result<(i32, Move), AiError> {
        if board.is_game_over() || board.is_full() {
            return Err(AiError::NoLegalMove(self.player));
        }
        let board = board.clone();
        let order = move_order(board.columns());
        // searching past the end of the game finds nothing new
        let empty_cells = board.dimensions().cells() - board.tokens().count();
        let max_depth = self.depth.min(empty_cells);

        self.node_count = 0;
        let start = Instant::now();
        let deadline = self.time_limit.map(|limit| start + limit);

        let mut best = None;
        let first_depth = if deadline.is_some() { 1 } else { max_depth };
        for depth in first_depth..=max_depth {
            // the first iteration always runs to completion so there is a move to play
            let iteration_deadline = if best.is_some() { deadline } else { None };
            match self.top_level_search(&board, &order, depth, iteration_deadline) {
                Ok(None) => break,
                Ok(Some((score, column))) => {
                    trace!(
                        "Search depth: {}/{}, best column: {}, score: {}",
                        depth,
                        max_depth,
                        column,
                        score
                    );
                    best = Some((score, column));
                    // a forced win will not get any faster at a greater depth
                    if score >= WIN_SCORE {
                        break;
                    }
                }
                Err(Timeout) => {
                    warn!(
                        "Search for {} stopped at depth {}/{} after {:?}",
                        self.player,
                        depth,
                        max_depth,
                        start.elapsed()
                    );
                    break;
                }
            }
            if deadline.map_or(false, |deadline| Instant::now() >= deadline) {
                break;
            }
        }

        let (score, column) = best.ok_or(AiError::NoLegalMove(self.player))?;
        let row = board
            .landing_row(column)
            .ok_or(AiError::NoLegalMove(self.player))?;

        debug!(
            "{} chose column {} with score {} ({} nodes in {:?})",
            self.player,
            column,
            score,
            self.node_count,
            start.elapsed()
        );
        Ok((score, Move::new(row, column)))
    }

    /// Performs the root search, keeping track of the best move
    ///
    /// Returns the score of the position and the best column, or `None` if
    /// no column is playable.
    fn top_level_search(
        &mut self,
        board: &Board,
        order: &[usize],
        depth: usize,
        deadline: Option<Instant>,
    ) -> Result<Option<(i32, usize)>, Timeout> {
        self.node_count += 1;

        let mut alpha = -INFINITY;
        let mut best: Option<(i32, usize)> = None;
        for &column in order {
            if !board.playable(column) {
                continue;
            }
            let score = self.score_move(board, order, column, self.player, depth, alpha, INFINITY, deadline)?;
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, column));
            }
            if score > alpha {
                alpha = score;
            }
        }
        Ok(best)
    }

    /// Plays `column` for `player` on a copy of the board and scores the
    /// result from `player`'s point of view
    #[allow(clippy::too_many_arguments)]
    fn score_move(
        &mut self,
        board: &Board,
        order: &[usize],
        column: usize,
        player: Player,
        depth: usize,
        alpha: i32,
        beta: i32,
        deadline: Option<Instant>,
    ) -> Result<i32, Timeout> {
        let mut next = board.clone();
        let placed = match next.make_move(column, player) {
            Ok(placed) => placed,
            Err(_) => return Ok(-INFINITY),
        };

        if next.wins_at(placed) {
            return Ok(WIN_SCORE + depth as i32);
        }
        if next.is_full() {
            return Ok(0);
        }
        // the search window is flipped for the other player
        Ok(-self.negamax(&next, order, player.other(), depth - 1, -beta, -alpha, deadline)?)
    }

    /// Performs game tree search for the player to move
    ///
    /// The position is known not to be terminal. Returns the score of the
    /// position (see [Position Scoring]).
    ///
    /// [Position Scoring]: #position-scoring
    #[allow(clippy::too_many_arguments)]
    fn negamax(
        &mut self,
        board: &Board,
        order: &[usize],
        to_move: Player,
        depth: usize,
        mut alpha: i32,
        beta: i32,
        deadline: Option<Instant>,
    ) -> Result<i32, Timeout> {
        self.node_count += 1;

        if let Some(deadline) = deadline {
            if self.node_count % CLOCK_INTERVAL == 0 && Instant::now() >= deadline {
                return Err(Timeout);
            }
        }

        if depth == 0 {
            // check for next-move win for the player to move
            if order
                .iter()
                .any(|&column| board.playable(column) && board.is_winning_move(column, to_move))
            {
                return Ok(WIN_SCORE);
            }
            return Ok(heuristic(board, to_move));
        }

        let mut best = -INFINITY;
        for &column in order {
            if !board.playable(column) {
                continue;
            }
            let score = self.score_move(board, order, column, to_move, depth, alpha, beta, deadline)?;
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            // the opponent will not allow this branch, prune the rest
            if alpha >= beta {
                break;
            }
        }
        Ok(best)
    }
}

impl Agent for MinimaxAi {
    fn choose_move(&mut self, board: &Board) -> Result<Move, AiError> {
        self.search(board).map(|(_, best_move)| best_move)
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
