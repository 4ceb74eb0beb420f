use super::super::attack_tables::KING_ATTACKS;
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// King steps plus castling.
    ///
    /// Castling here only checks rights, rook presence and empty squares
    /// between; attacked-square rules are enforced by `legal_moves`.
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let own = self.occupied_by(color).0;
        self.push_targets(from, Bitboard(KING_ATTACKS[from.index()] & !own), moves);

        let rank = color.back_rank();
        if from != Square(rank, 4) {
            return;
        }
        let rook_home = |file| self.piece_at(Square(rank, file)) == Some((color, Piece::Rook));
        let empty = |files: &[usize]| files.iter().all(|&f| self.is_empty(Square(rank, f)));

        if self.castling_rights.has(color, true) && empty(&[5, 6]) && rook_home(7) {
            moves.push(Move::castle_kingside(from, Square(rank, 6)));
        }
        if self.castling_rights.has(color, false) && empty(&[1, 2, 3]) && rook_home(0) {
            moves.push(Move::castle_queenside(from, Square(rank, 2)));
        }
    }

    /// Whether `color` still holds any castling right
    #[must_use]
    pub fn can_castle(&self, color: Color) -> bool {
        self.castling_rights.has(color, true) || self.castling_rights.has(color, false)
    }
}
