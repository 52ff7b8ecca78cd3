//! Game-over predicates built on top of the [`Board`] move generator.

use crate::chess::board::Board;
use crate::chess::core::Player;

/// Checks whether either side has run out of legal moves.
#[must_use]
pub fn no_moves(board: &impl Board) -> bool {
    board.legal_moves(Player::White).is_empty() || board.legal_moves(Player::Black).is_empty()
}

/// Checks whether `player`'s king is checkmated: no legal moves are left and
/// the king is attacked.
#[must_use]
pub fn is_checkmate(board: &impl Board, player: Player) -> bool {
    no_moves(board) && board.is_in_check(board.king_square(player))
}
