//! Chess primitives commonly used within [`crate::chess`] and
//! [`crate::notation`].

use std::fmt::{self, Write};

use anyhow::{bail, Context};
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Self::try_from(file as u8 - b'a'),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;

    fn try_from(column: u8) -> anyhow::Result<Self> {
        match Self::ALL.get(usize::from(column)) {
            Some(&file) => Ok(file),
            None => bail!("file should be within 0..BOARD_WIDTH, got {column}"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
    ];

    /// The rank both king and rooks of `player` start on.
    #[must_use]
    pub const fn backrank(player: Player) -> Self {
        match player {
            Player::White => Self::One,
            Player::Black => Self::Eight,
        }
    }

    /// The rank pawns of `player` promote on.
    #[must_use]
    pub const fn promotion(player: Player) -> Self {
        Self::backrank(player.opponent())
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Self::try_from(rank as u8 - b'1'),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(row: u8) -> anyhow::Result<Self> {
        match Self::ALL.get(usize::from(row)) {
            Some(&rank) => Ok(rank),
            None => bail!("rank should be within 0..BOARD_WIDTH, got {row}"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// A location on the board. Both parts are always within the board, so an
/// off-board square can not be constructed.
///
/// ```
/// use chess_notation::chess::core::{File, Rank, Square};
///
/// let square = Square::try_from("e4")?;
/// assert_eq!(square, Square::new(File::E, Rank::Four));
/// assert_eq!(square, Square::from_coordinates(3, 4)?);
/// assert_eq!(square.to_string(), "e4");
/// assert!(Square::from_coordinates(8, 0).is_err());
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    rank: Rank,
    file: File,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { rank, file }
    }

    /// Creates a square from zero-based `(rank, file)` coordinates.
    ///
    /// # Errors
    ///
    /// If either coordinate is outside 0..[`BOARD_WIDTH`] range.
    pub fn from_coordinates(rank: u8, file: u8) -> anyhow::Result<Self> {
        Ok(Self::new(
            File::try_from(file).context("square is off the board")?,
            Rank::try_from(rank).context("square is off the board")?,
        ))
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        self.file
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            );
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Maps a piece letter used in algebraic notation to the piece kind. The
    /// letter is case-insensitive; pawns do not have a letter.
    ///
    /// ```
    /// use chess_notation::chess::core::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_letter('N'), Some(PieceKind::Knight));
    /// assert_eq!(PieceKind::from_letter('q'), Some(PieceKind::Queen));
    /// assert_eq!(PieceKind::from_letter('P'), None);
    /// assert_eq!(PieceKind::from_letter(' '), None);
    /// ```
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'R' => Some(Self::Rook),
            'N' => Some(Self::Knight),
            'B' => Some(Self::Bishop),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        })
    }
}

/// Represents a specific piece owned by a player and standing on a square.
///
/// Two pieces are equal when they are of the same kind and owned by the same
/// player: the square is not compared. [`crate::chess::moves::Move`] relies on
/// this when comparing moving and promoted pieces.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    #[allow(missing_docs)]
    pub kind: PieceKind,
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub square: Square,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(kind: PieceKind, owner: Player, square: Square) -> Self {
        Self {
            kind,
            owner,
            square,
        }
    }

    /// Compares kind and owner, ignoring where the pieces stand.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        self.kind == other.kind && self.owner == other.owner
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.same_kind(other)
    }
}

impl Eq for Piece {}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.to_string();
        match self.owner {
            // White player: uppercase symbols.
            Player::White => f.write_str(&symbol.to_ascii_uppercase()),
            // Black player: lowercase symbols.
            Player::Black => f.write_str(&symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn files() {
        assert_eq!(File::try_from('a').unwrap(), File::A);
        assert_eq!(File::try_from('h').unwrap(), File::H);
        assert!(File::try_from('i').is_err());
        assert!(File::try_from('A').is_err());
        assert_eq!(File::try_from(6_u8).unwrap(), File::G);
        assert!(File::try_from(8_u8).is_err());
        assert_eq!(File::C.to_string(), "c");
    }

    #[test]
    fn ranks() {
        assert_eq!(Rank::try_from('1').unwrap(), Rank::One);
        assert_eq!(Rank::try_from('8').unwrap(), Rank::Eight);
        assert!(Rank::try_from('0').is_err());
        assert!(Rank::try_from('9').is_err());
        assert!(Rank::try_from(8_u8).is_err());
        assert_eq!(Rank::Five.to_string(), "5");
        assert_eq!(Rank::backrank(Player::White), Rank::One);
        assert_eq!(Rank::backrank(Player::Black), Rank::Eight);
        assert_eq!(Rank::promotion(Player::White), Rank::Eight);
        assert_eq!(Rank::promotion(Player::Black), Rank::One);
    }

    #[test]
    fn squares() {
        assert_eq!(
            Square::try_from("a1").unwrap(),
            Square::new(File::A, Rank::One)
        );
        assert_eq!(
            Square::from_coordinates(7, 3).unwrap(),
            Square::new(File::D, Rank::Eight)
        );
        assert!(Square::from_coordinates(0, 8).is_err());
        assert!(Square::from_coordinates(255, 0).is_err());
        assert!(Square::try_from("e").is_err());
        assert!(Square::try_from("e44").is_err());
        assert!(Square::try_from("e9").is_err());
        assert_eq!(Square::new(File::H, Rank::Eight).to_string(), "h8");
    }

    #[test]
    fn piece_equality_ignores_square() {
        let e1 = Square::try_from("e1").unwrap();
        let d4 = Square::try_from("d4").unwrap();
        assert_eq!(
            Piece::new(PieceKind::King, Player::White, e1),
            Piece::new(PieceKind::King, Player::White, d4)
        );
        assert_ne!(
            Piece::new(PieceKind::King, Player::White, e1),
            Piece::new(PieceKind::King, Player::Black, e1)
        );
        assert_ne!(
            Piece::new(PieceKind::King, Player::White, e1),
            Piece::new(PieceKind::Queen, Player::White, e1)
        );
    }

    #[test]
    fn piece_symbols() {
        let square = Square::try_from("a1").unwrap();
        assert_eq!(
            Piece::new(PieceKind::Knight, Player::White, square).to_string(),
            "N"
        );
        assert_eq!(
            Piece::new(PieceKind::Knight, Player::Black, square).to_string(),
            "n"
        );
    }
}
