//! Static evaluation of board positions

use crate::board::{Board, Player};

/// The score of a won position, from the winner's perspective
///
/// Larger than any heuristic score on a supported board, so that a win is
/// always preferred to a merely promising position.
pub const WIN_SCORE: i32 = 1_000_000_000;

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

// heuristic scores stay strictly inside the win scores
const HEURISTIC_LIMIT: i64 = WIN_SCORE as i64 - 1;

/// The value of a window holding `tokens` of one player and nothing of the other
fn window_weight(tokens: usize) -> i64 {
    match tokens {
        0 => 0,
        n => 10i64
            .saturating_pow((n - 1).min(u32::MAX as usize) as u32)
            .min(HEURISTIC_LIMIT),
    }
}

/// Scores a position from `perspective`'s point of view
///
/// Won positions score `WIN_SCORE` (or its negation for a loss) and full
/// boards score 0. Anything else falls back to [`heuristic`].
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    match board.find_winner() {
        Some(winner) if winner == perspective => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None if board.is_full() => 0,
        None => heuristic(board, perspective),
    }
}

/// Counts every run-length window that only one player can still complete
///
/// A window holding `n` tokens of one player and none of the other scores
/// `10^(n-1)` for that player. Windows holding both players are dead and
/// score nothing. The opponent's windows are subtracted, so swapping the
/// perspective negates the score. The total is clamped to lie strictly
/// between `-WIN_SCORE` and `WIN_SCORE`.
pub fn heuristic(board: &Board, perspective: Player) -> i32 {
    let own_cell = perspective.to_cell();
    let opp_cell = perspective.other().to_cell();
    let (rows, columns, length) = (
        board.rows() as isize,
        board.columns() as isize,
        board.in_a_row() as isize,
    );
    let mut score: i64 = 0;

    for &(d_row, d_col) in DIRECTIONS.iter() {
        for row in 0..rows {
            for column in 0..columns {
                let end_row = row + d_row * (length - 1);
                let end_col = column + d_col * (length - 1);
                if end_row < 0 || end_row >= rows || end_col < 0 || end_col >= columns {
                    continue;
                }

                let (mut own, mut opp) = (0, 0);
                for i in 0..length {
                    match board.cell((row + d_row * i) as usize, (column + d_col * i) as usize) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => {}
                    }
                }

                if opp == 0 {
                    score = score.saturating_add(window_weight(own));
                } else if own == 0 {
                    score = score.saturating_sub(window_weight(opp));
                }
            }
        }
    }
    score.clamp(-HEURISTIC_LIMIT, HEURISTIC_LIMIT) as i32
}
