use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_slider_moves(&self, from: Square, slider: Piece, moves: &mut MoveList) {
        let own = self.occupied_by(self.side_to_move()).0;
        let occ = self.all_occupied.0;
        let idx = from.index();

        let attacks = match slider {
            Piece::Bishop => bishop_attacks(idx, occ),
            Piece::Rook => rook_attacks(idx, occ),
            Piece::Queen => queen_attacks(idx, occ),
            _ => 0,
        };
        self.push_targets(from, Bitboard(attacks & !own), moves);
    }
}
