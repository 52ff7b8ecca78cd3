//! Moves: both partial descriptors produced from notation and the fully
//! specified legal moves produced by a move generator.

use std::fmt;

use arrayvec::ArrayVec;

use crate::chess::core::{File, Piece, Player, Rank, Square};

/// What kind of action a [`Move`] performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// Moving a piece to an empty square.
    Movement,
    /// Taking an opponent's piece, including en passant and capturing
    /// promotions.
    Capture,
    /// Short castle or O-O.
    KingsideCastle,
    /// Long castle or O-O-O.
    QueensideCastle,
    /// Pawn advancement to the last rank without a capture.
    Promote,
    /// Move given in long algebraic notation: start and end squares are known,
    /// the kind of action is not.
    StartSquareSpecified,
}

/// A move on the board.
///
/// A move is a descriptor rather than a guaranteed legal move: parsed notation
/// only records what was literally written and leaves the start rank, start
/// file and promotion unset when the notation omits them. Such partial moves
/// are resolved against generated legal moves via [`Move::matches`].
///
/// Moves are built with [`Move::new`] and refined with the `with_*` builder
/// steps; a move generator annotates each generated move with its origin
/// through [`Move::with_origin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    end: Square,
    piece: Piece,
    status: MoveStatus,
    start_rank: Option<Rank>,
    start_file: Option<File>,
    promotion: Option<Piece>,
}

impl Move {
    /// Creates a move of `piece` to `end` without any disambiguation.
    #[must_use]
    pub const fn new(end: Square, piece: Piece, status: MoveStatus) -> Self {
        Self {
            end,
            piece,
            status,
            start_rank: None,
            start_file: None,
            promotion: None,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn with_start_rank(self, rank: Rank) -> Self {
        Self {
            start_rank: Some(rank),
            ..self
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn with_start_file(self, file: File) -> Self {
        Self {
            start_file: Some(file),
            ..self
        }
    }

    /// Records both start rank and start file.
    #[must_use]
    pub const fn with_origin(self, origin: Square) -> Self {
        self.with_start_rank(origin.rank())
            .with_start_file(origin.file())
    }

    /// Sets the piece a pawn turns into.
    #[must_use]
    pub const fn with_promotion(self, piece: Piece) -> Self {
        Self {
            promotion: Some(piece),
            ..self
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn end(&self) -> Square {
        self.end
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// The player making this move.
    #[must_use]
    pub const fn player(&self) -> Player {
        self.piece.owner
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn status(&self) -> MoveStatus {
        self.status
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn start_rank(&self) -> Option<Rank> {
        self.start_rank
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn start_file(&self) -> Option<File> {
        self.start_file
    }

    /// Returns the origin square if both start rank and start file are known.
    #[must_use]
    pub const fn start(&self) -> Option<Square> {
        match (self.start_file, self.start_rank) {
            (Some(file), Some(rank)) => Some(Square::new(file, rank)),
            _ => None,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    /// Checks whether the move lands on the rank where the mover's pawns
    /// promote.
    #[must_use]
    pub fn is_promotion_square(&self) -> bool {
        self.end.rank() == Rank::promotion(self.player())
    }

    /// Base equality of two moves, where an unset optional field matches
    /// anything.
    ///
    /// Any optional field (start rank, start file, promotion) set on both
    /// sides to different values makes the moves different. Otherwise, the
    /// end square, the moving piece (kind and owner) and the status have to
    /// be equal.
    ///
    /// ```
    /// use chess_notation::chess::core::{File, Piece, PieceKind, Player, Square};
    /// use chess_notation::chess::moves::{Move, MoveStatus};
    ///
    /// let d5 = Square::try_from("d5")?;
    /// let knight = Piece::new(PieceKind::Knight, Player::White, d5);
    /// let any_knight = Move::new(d5, knight, MoveStatus::Movement);
    /// let from_c = any_knight.with_start_file(File::C);
    /// let from_d = any_knight.with_start_file(File::D);
    ///
    /// assert!(any_knight.matches(&from_d));
    /// assert!(!from_c.matches(&from_d));
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        if !agrees(self.start_rank, other.start_rank)
            || !agrees(self.start_file, other.start_file)
            || !agrees(self.promotion, other.promotion)
        {
            return false;
        }
        self.end == other.end && self.piece == other.piece && self.status == other.status
    }
}

/// Two optional values agree if they are equal or either of them is absent.
pub(crate) fn agrees<T: PartialEq>(lhs: Option<T>, rhs: Option<T>) -> bool {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs == rhs,
        _ => true,
    }
}

impl fmt::Display for Move {
    /// Serializes a move in long algebraic notation (same as [UCI format]):
    /// start square, end square and the promotion piece if there is one.
    ///
    /// [UCI format]: http://wbec-ridderkerk.nl/html/UCIProtocol.html
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start() {
            write!(f, "{start}")?;
        }
        write!(f, "{}", self.end)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.kind)?;
        }
        Ok(())
    }
}

/// Theoretical maximum number of legal moves in any chess position is 218.
pub const MAX_MOVES: usize = 256;

/// Legal moves of one side, as produced by a
/// [`crate::chess::board::Board`].
pub type MoveList = ArrayVec<Move, MAX_MOVES>;
