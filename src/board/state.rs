use super::{Bitboard, CastlingRights, Color, Move, Piece, Square};

/// Everything `Board::apply` changes that cannot be recomputed from the move.
///
/// Returned by `apply` and consumed by `undo`; holding the token is the only
/// way to reverse a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "an UndoToken is the only way to take the move back"]
pub struct UndoToken {
    pub(crate) mv: Move,
    pub(crate) captured: Option<Piece>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl UndoToken {
    /// The move this token reverses
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The piece removed from the board by the move, if any
    #[must_use]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

/// A chess position.
///
/// Piece placement is kept as one bitboard per color and piece type plus
/// derived occupancy sets. Two boards compare equal exactly when every field
/// matches, so `==` is a bit-for-bit comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) white_to_move: bool,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, i), Color::White, *piece);
            board.set_piece(Square(7, i), Color::Black, *piece);
            board.set_piece(Square(1, i), Color::White, Piece::Pawn);
            board.set_piece(Square(6, i), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            white_to_move: true,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture onto en passant, set right after a double push
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Bitboard of one color's pieces of one type
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// Bitboard of all pieces of one color
    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq).0;
        self.pieces[color.index()][piece.index()].0 |= bit;
        self.occupied[color.index()].0 |= bit;
        self.all_occupied.0 |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq).0;
        self.pieces[color.index()][piece.index()].0 &= !bit;
        self.occupied[color.index()].0 &= !bit;
        self.all_occupied.0 &= !bit;
    }

    /// Color and type of the piece on a square
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|piece| self.pieces[color.index()][piece.index()].contains(sq))
            .map(|piece| (color, piece))
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    /// Where `color`'s king stands.
    ///
    /// Always `Some` for positions reached from the start by legal moves; a
    /// hand-made FEN without a king yields `None`.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, Piece::King).iter().next()
    }

    /// The same position seen from the other side: ranks mirrored, every
    /// piece and right handed to the other color, other side to move.
    #[must_use]
    pub fn color_flipped(&self) -> Board {
        let mut flipped = Board::empty();
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces_of(color, piece).iter() {
                    flipped.set_piece(sq.flip_vertical(), color.opponent(), piece);
                }
            }
        }
        flipped.white_to_move = !self.white_to_move;
        flipped.castling_rights = self.castling_rights.swapped();
        flipped.en_passant_target = self.en_passant_target.map(Square::flip_vertical);
        flipped.halfmove_clock = self.halfmove_clock;
        flipped.fullmove_number = self.fullmove_number;
        flipped
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_layout() {
        let board = Board::new();
        assert_eq!(board.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(7, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_at(Square(3, 3)), None);
        assert_eq!(board.all_occupied.popcount(), 32);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), CastlingRights::all());
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn test_king_square() {
        let board = Board::new();
        assert_eq!(board.king_square(Color::White), Some(Square(0, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square(7, 4)));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn test_start_position_is_its_own_color_flip_except_side() {
        let board = Board::new();
        let flipped = board.color_flipped();
        assert_eq!(flipped.side_to_move(), Color::Black);
        assert_eq!(flipped.pieces, board.pieces);
        assert_eq!(flipped.castling_rights(), board.castling_rights());
    }

    #[test]
    fn test_color_flip_twice_is_identity() {
        let board = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        assert_eq!(board.color_flipped().color_flipped(), board);
    }
}
