//! Interface of the chess position the notation is resolved against.
//!
//! The rules of chess (move generation, attacks, check detection) live behind
//! this trait: [`crate::notation`] only queries a board and never mutates it.

use crate::chess::core::{Piece, Player, Square};
use crate::chess::moves::MoveList;

/// Read-only view of a chess position.
pub trait Board {
    /// Generates every legal move of `player` in the current position.
    ///
    /// Each move has to be fully specified:
    ///
    /// - The origin is recorded ([`crate::chess::moves::Move::with_origin`]).
    /// - Captures, including en passant and capturing promotions, have
    ///   [`MoveStatus::Capture`] status.
    /// - Promotions without a capture have [`MoveStatus::Promote`] status.
    /// - Castles have [`MoveStatus::KingsideCastle`] or
    ///   [`MoveStatus::QueensideCastle`] status, the king as the moving piece
    ///   and the king's destination as the end square.
    ///
    /// [`MoveStatus::Capture`]: crate::chess::moves::MoveStatus::Capture
    /// [`MoveStatus::Promote`]: crate::chess::moves::MoveStatus::Promote
    /// [`MoveStatus::KingsideCastle`]: crate::chess::moves::MoveStatus::KingsideCastle
    /// [`MoveStatus::QueensideCastle`]: crate::chess::moves::MoveStatus::QueensideCastle
    fn legal_moves(&self, player: Player) -> MoveList;

    /// Returns the piece standing on `square`, if any.
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Returns the square of the `player`'s king.
    fn king_square(&self, player: Player) -> Square;

    /// Checks whether the piece standing on `square` is attacked by the
    /// opponent.
    fn is_in_check(&self, square: Square) -> bool;
}
