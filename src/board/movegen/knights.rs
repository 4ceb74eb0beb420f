use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let own = self.occupied_by(self.side_to_move()).0;
        let targets = Bitboard(KNIGHT_ATTACKS[from.index()] & !own);
        self.push_targets(from, targets, moves);
    }
}
