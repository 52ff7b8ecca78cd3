#![no_main]
use chess_notation::chess::board::Board;
use chess_notation::chess::core::{File, Piece, PieceKind, Player, Rank, Square};
use chess_notation::chess::moves::{Move, MoveList, MoveStatus};
use chess_notation::notation;
use libfuzzer_sys::fuzz_target;

/// The starting position: pawn pushes and knight jumps are the only legal
/// moves.
struct Starting;

impl Starting {
    fn pieces(player: Player) -> impl Iterator<Item = Piece> {
        let (back, pawns) = match player {
            Player::White => (Rank::One, Rank::Two),
            Player::Black => (Rank::Eight, Rank::Seven),
        };
        let officers = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        (0..8_u8).flat_map(move |column| {
            let file = File::try_from(column).unwrap();
            [
                Piece::new(officers[usize::from(column)], player, Square::new(file, back)),
                Piece::new(PieceKind::Pawn, player, Square::new(file, pawns)),
            ]
        })
    }
}

impl Board for Starting {
    fn legal_moves(&self, player: Player) -> MoveList {
        let (one, two, jump) = match player {
            Player::White => (Rank::Three, Rank::Four, Rank::Three),
            Player::Black => (Rank::Six, Rank::Five, Rank::Six),
        };
        let mut moves = MoveList::new();
        for piece in Self::pieces(player) {
            let file = piece.square.file();
            let targets = match piece.kind {
                PieceKind::Pawn => vec![Square::new(file, one), Square::new(file, two)],
                PieceKind::Knight => [-1_i8, 1]
                    .into_iter()
                    .filter_map(|delta| (file as u8).checked_add_signed(delta))
                    .filter_map(|column| File::try_from(column).ok())
                    .map(|to| Square::new(to, jump))
                    .collect(),
                _ => Vec::new(),
            };
            for to in targets {
                moves.push(
                    Move::new(to, piece, MoveStatus::Movement).with_origin(piece.square),
                );
            }
        }
        moves
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        [Player::White, Player::Black]
            .into_iter()
            .flat_map(Self::pieces)
            .find(|piece| piece.square == square)
    }

    fn king_square(&self, player: Player) -> Square {
        Square::new(File::E, Rank::backrank(player))
    }

    fn is_in_check(&self, _: Square) -> bool {
        false
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for player in [Player::White, Player::Black] {
            if let Some(parsed) = notation::parse(s, player) {
                assert_eq!(parsed.player(), player);
            }
        }
        if let Ok(resolved) = notation::long_alg_to_move(s, &Starting) {
            let again = notation::long_alg_to_move(&resolved.to_string(), &Starting);
            assert_eq!(again.ok(), Some(resolved));
        }
    }
});
