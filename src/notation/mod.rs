//! Conversion of algebraic chess notation into legal moves.
//!
//! Short algebraic notation ("e4", "Nxf3", "exd8=Q") is first [`parse`]d into a
//! partial [`Move`] that records only what the notation says, then
//! [`legalize`]d: matched against the legal moves generated by the
//! [`Board`]. Long algebraic notation ("e2e4", "e7e8q") names both squares
//! and only needs the board to find out which piece moves.

use anyhow::{bail, Context};

use crate::chess::board::Board;
use crate::chess::core::{Piece, PieceKind, Player, Square};
use crate::chess::moves::{Move, MoveStatus};

mod legalizer;
mod parser;

pub use legalizer::legalize;
pub use parser::parse;

/// Converts short algebraic notation into the legal move of `player` it refers
/// to. Returns [`None`] if the notation can not be interpreted or no legal move
/// matches it.
///
/// ```
/// use chess_notation::chess::board::Board;
/// use chess_notation::chess::core::{Piece, Player, Square};
/// use chess_notation::chess::moves::MoveList;
/// use chess_notation::notation::short_alg_to_move;
///
/// /// A board where nothing can move.
/// struct Frozen;
///
/// impl Board for Frozen {
///     fn legal_moves(&self, _: Player) -> MoveList {
///         MoveList::new()
///     }
///
///     fn piece_at(&self, _: Square) -> Option<Piece> {
///         None
///     }
///
///     fn king_square(&self, _: Player) -> Square {
///         Square::try_from("e1").unwrap()
///     }
///
///     fn is_in_check(&self, _: Square) -> bool {
///         false
///     }
/// }
///
/// assert!(short_alg_to_move("e4", Player::White, &Frozen).is_none());
/// ```
#[must_use]
pub fn short_alg_to_move(token: &str, player: Player, board: &impl Board) -> Option<Move> {
    let candidate = parse(token, player)?;
    legalize(&candidate, &board.legal_moves(player))
}

/// Converts long algebraic notation (start square, end square and an optional
/// promotion letter: "e2e4", "e7e8q") into the legal move it refers to. The
/// moving piece is the one standing on the start square.
///
/// Unlike [`short_alg_to_move`], the input is expected to be valid.
///
/// # Errors
///
/// If the token is not 4 or 5 characters long, either square is malformed,
/// the start square is empty, the promotion letter is not one of "QRBN"
/// (case-insensitive) or no legal move matches.
pub fn long_alg_to_move(token: &str, board: &impl Board) -> anyhow::Result<Move> {
    resolve_long(token, board).inspect_err(|error| {
        tracing::debug!(token, %error, "rejected long algebraic notation");
    })
}

fn resolve_long(token: &str, board: &impl Board) -> anyhow::Result<Move> {
    if !token.is_ascii() || !(4..=5).contains(&token.len()) {
        bail!("long algebraic notation should be 4 or 5 ASCII chars, got '{token}'");
    }
    let start = Square::try_from(&token[..2])
        .with_context(|| format!("invalid start square in '{token}'"))?;
    let end = Square::try_from(&token[2..4])
        .with_context(|| format!("invalid end square in '{token}'"))?;
    let Some(piece) = board.piece_at(start) else {
        bail!("start square {start} of '{token}' is empty");
    };

    let mut candidate =
        Move::new(end, piece, MoveStatus::StartSquareSpecified).with_origin(start);
    if let Some(letter) = token[4..].chars().next() {
        candidate =
            candidate.with_promotion(Piece::new(promotion(letter)?, piece.owner, end));
    }

    legalize(&candidate, &board.legal_moves(piece.owner))
        .with_context(|| format!("no legal move matches '{token}'"))
}

fn promotion(letter: char) -> anyhow::Result<PieceKind> {
    match PieceKind::from_letter(letter) {
        Some(
            kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight),
        ) => Ok(kind),
        _ => bail!("promotion should be one of \"QRBN\", got '{letter}'"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::moves::MoveList;

    fn square(square: &str) -> Square {
        Square::try_from(square).unwrap()
    }

    /// A white pawn on e7 about to promote and a white knight on g1.
    struct Promoting {
        moves: MoveList,
    }

    impl Promoting {
        fn new() -> Self {
            let mut moves = MoveList::new();
            let pawn = Piece::new(PieceKind::Pawn, Player::White, square("e7"));
            for kind in [
                PieceKind::Queen,
                PieceKind::Rook,
                PieceKind::Bishop,
                PieceKind::Knight,
            ] {
                moves.push(
                    Move::new(square("e8"), pawn, MoveStatus::Promote)
                        .with_origin(square("e7"))
                        .with_promotion(Piece::new(kind, Player::White, square("e8"))),
                );
            }
            let knight = Piece::new(PieceKind::Knight, Player::White, square("g1"));
            for to in ["f3", "h3", "e2"] {
                moves.push(
                    Move::new(square(to), knight, MoveStatus::Movement)
                        .with_origin(square("g1")),
                );
            }
            Self { moves }
        }
    }

    impl Board for Promoting {
        fn legal_moves(&self, player: Player) -> MoveList {
            match player {
                Player::White => self.moves.clone(),
                Player::Black => MoveList::new(),
            }
        }

        fn piece_at(&self, square: Square) -> Option<Piece> {
            self.moves
                .iter()
                .map(Move::piece)
                .find(|piece| piece.square == square)
        }

        fn king_square(&self, _: Player) -> Square {
            square("a1")
        }

        fn is_in_check(&self, _: Square) -> bool {
            false
        }
    }

    #[test]
    fn short_algebraic() {
        let board = Promoting::new();
        assert_eq!(
            short_alg_to_move("Nf3", Player::White, &board).map(|m| m.to_string()),
            Some("g1f3".to_string())
        );
        assert_eq!(
            short_alg_to_move("e8=R", Player::White, &board).map(|m| m.to_string()),
            Some("e7e8r".to_string())
        );
        assert_eq!(short_alg_to_move("Nd4", Player::White, &board), None);
        assert_eq!(short_alg_to_move("Nf3", Player::Black, &board), None);
        assert_eq!(short_alg_to_move("Pf3", Player::White, &board), None);
    }

    #[test]
    fn long_algebraic() {
        let board = Promoting::new();
        assert_eq!(
            long_alg_to_move("g1e2", &board).unwrap().to_string(),
            "g1e2"
        );
        assert_eq!(
            long_alg_to_move("e7e8n", &board).unwrap().to_string(),
            "e7e8n"
        );
        assert_eq!(
            long_alg_to_move("e7e8B", &board).unwrap().to_string(),
            "e7e8b"
        );
        // Without a promotion letter the first generated promotion is picked.
        assert_eq!(
            long_alg_to_move("e7e8", &board).unwrap().to_string(),
            "e7e8q"
        );
    }

    #[test]
    fn long_algebraic_errors() {
        let board = Promoting::new();
        for (token, error) in [
            ("e2", "should be 4 or 5 ASCII chars"),
            ("e7e8qq", "should be 4 or 5 ASCII chars"),
            ("e7é8", "should be 4 or 5 ASCII chars"),
            ("i1f3", "invalid start square"),
            ("g1f9", "invalid end square"),
            ("d4d5", "is empty"),
            ("e7e8k", "promotion should be one of"),
            ("e7e8x", "promotion should be one of"),
            ("g1g3", "no legal move matches"),
            ("g1f3q", "no legal move matches"),
            ("g1f3N", "no legal move matches"),
        ] {
            let result = long_alg_to_move(token, &board);
            assert!(result.is_err(), "{token}");
            let message = format!("{:#}", result.unwrap_err());
            assert!(message.contains(error), "{token}: {message}");
        }
    }
}
