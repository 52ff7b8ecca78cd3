//! Parses short algebraic notation into partial [`Move`] descriptors.
//!
//! The notation is irregular: instead of a grammar, the token is dispatched by
//! its length and the characters at fixed positions. Supported shapes:
//!
//! | Length | Shape    | Example  | Meaning |
//! | ------ | -------- | -------- | ------- |
//! | 2      | `fr`     | `e4`     | Pawn push |
//! | 2      | `00`     | `00`     | Kingside castle |
//! | 3      | `000`    | `000`    | Queenside castle |
//! | 3      | `Pfr`    | `Nf3`    | Piece move |
//! | 4      | `fxfr`   | `exd5`   | Pawn capture from the given file |
//! | 4      | `Pxfr`   | `Nxf3`   | Piece capture |
//! | 4      | `fr=P`   | `e8=Q`   | Pawn promotion |
//! | 4      | `fPfr`   | `gNf3`   | Piece move from the given file |
//! | 5      | `frPfr`  | `g1Nf3`  | Piece move from the given square |
//! | 6      | `fxfr=P` | `exd8=Q` | Pawn capture with promotion |
//!
//! Where `f` is a file letter, `r` is a rank digit and `P` is a piece letter.
//! The 4-character shapes are tried in the order listed above.

use itertools::Itertools;

use crate::chess::core::{File, Piece, PieceKind, Player, Rank, Square};
use crate::chess::moves::{Move, MoveStatus};

/// Converts a short algebraic notation `token` into a potentially legal move
/// of `player`.
///
/// Only the information present in the notation is recorded: the result has
/// to be resolved against the legal moves (see
/// [`crate::notation::legalize`]). Returns [`None`] if the token has an
/// unknown shape, names an unknown piece or an off-board square.
///
/// ```
/// use chess_notation::chess::core::{File, PieceKind, Player, Square};
/// use chess_notation::chess::moves::MoveStatus;
/// use chess_notation::notation::parse;
///
/// let capture = parse("exd5", Player::White).unwrap();
/// assert_eq!(capture.end(), Square::try_from("d5")?);
/// assert_eq!(capture.piece().kind, PieceKind::Pawn);
/// assert_eq!(capture.status(), MoveStatus::Capture);
/// assert_eq!(capture.start_file(), Some(File::E));
///
/// assert!(parse("Pe4", Player::White).is_none());
/// # Ok::<(), anyhow::Error>(())
/// ```
#[must_use]
pub fn parse(token: &str, player: Player) -> Option<Move> {
    let parsed = match token {
        "00" => Some(castle(player, true)),
        "000" => Some(castle(player, false)),
        _ => match token.chars().count() {
            2 => pawn_push(token, player),
            3 => piece_move(token, player),
            4 => four_chars(token, player),
            5 => piece_move_from_square(token, player),
            6 => capture_promotion(token, player),
            _ => None,
        },
    };
    if parsed.is_none() {
        tracing::trace!(token, %player, "unrecognized short algebraic notation");
    }
    parsed
}

fn square(file: char, rank: char) -> Option<Square> {
    Some(Square::new(
        File::try_from(file).ok()?,
        Rank::try_from(rank).ok()?,
    ))
}

fn pawn(player: Player, square: Square) -> Piece {
    Piece::new(PieceKind::Pawn, player, square)
}

fn piece(letter: char, player: Player, square: Square) -> Option<Piece> {
    PieceKind::from_letter(letter).map(|kind| Piece::new(kind, player, square))
}

/// The king moves two squares from its initial square towards the rook.
fn castle(player: Player, kingside: bool) -> Move {
    let rank = Rank::backrank(player);
    let (destination, status) = if kingside {
        (File::G, MoveStatus::KingsideCastle)
    } else {
        (File::C, MoveStatus::QueensideCastle)
    };
    let king = Piece::new(PieceKind::King, player, Square::new(File::E, rank));
    Move::new(Square::new(destination, rank), king, status).with_origin(king.square)
}

fn pawn_push(token: &str, player: Player) -> Option<Move> {
    let (file, rank) = token.chars().collect_tuple()?;
    let end = square(file, rank)?;
    Some(Move::new(end, pawn(player, end), MoveStatus::Movement))
}

fn piece_move(token: &str, player: Player) -> Option<Move> {
    let (letter, file, rank) = token.chars().collect_tuple()?;
    let end = square(file, rank)?;
    Some(Move::new(
        end,
        piece(letter, player, end)?,
        MoveStatus::Movement,
    ))
}

fn four_chars(token: &str, player: Player) -> Option<Move> {
    let (first, second, third, fourth) = token.chars().collect_tuple()?;
    let capture = second.eq_ignore_ascii_case(&'x');

    if capture && first.is_ascii_lowercase() {
        let end = square(third, fourth)?;
        return Some(
            Move::new(end, pawn(player, end), MoveStatus::Capture)
                .with_start_file(File::try_from(first).ok()?),
        );
    }
    if capture && first.is_ascii_uppercase() {
        let end = square(third, fourth)?;
        return Some(Move::new(
            end,
            piece(first, player, end)?,
            MoveStatus::Capture,
        ));
    }
    if third == '=' {
        let end = square(first, second)?;
        return Some(
            Move::new(end, pawn(player, end), MoveStatus::Promote)
                .with_promotion(piece(fourth, player, end)?),
        );
    }
    if second.is_ascii_uppercase() {
        let end = square(third, fourth)?;
        return Some(
            Move::new(end, piece(second, player, end)?, MoveStatus::Movement)
                .with_start_file(File::try_from(first).ok()?),
        );
    }
    None
}

fn piece_move_from_square(token: &str, player: Player) -> Option<Move> {
    let (file, rank, letter, end_file, end_rank) = token.chars().collect_tuple()?;
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let end = square(end_file, end_rank)?;
    Some(
        Move::new(end, piece(letter, player, end)?, MoveStatus::Movement)
            .with_start_file(File::try_from(file).ok()?)
            .with_start_rank(Rank::try_from(rank).ok()?),
    )
}

// Capture marker and the equals sign are not checked: the shape is
// identified by its length alone.
fn capture_promotion(token: &str, player: Player) -> Option<Move> {
    let (file, _, end_file, end_rank, _, letter) = token.chars().collect_tuple()?;
    let end = square(end_file, end_rank)?;
    Some(
        Move::new(end, pawn(player, end), MoveStatus::Capture)
            .with_start_file(File::try_from(file).ok()?)
            .with_promotion(piece(letter, player, end)?),
    )
}
