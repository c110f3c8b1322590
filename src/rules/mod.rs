//! Board rules: win detection, draw detection, and move legality.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::position::Position;
use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board to its current game status.
///
/// Win detection takes precedence over draw detection: a full board
/// with a completed line is a win, not a draw.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((player, line)) = check_winner(board) {
        GameStatus::Won(player, line)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Checks whether a move at the given position is legal.
///
/// A move is legal iff the game has no terminal result yet and the
/// target square is empty.
pub fn is_legal(board: &Board, status: &GameStatus, pos: Position) -> bool {
    !status.is_terminal() && board.is_empty(pos)
}
