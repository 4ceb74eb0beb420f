use super::super::attack_tables::pawn_attacks;
use super::super::{Bitboard, Board, Move, MoveList, Square, PROMOTION_PIECES};

impl Board {
    /// Pushes, double pushes, captures, en passant and promotions for one pawn.
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                if forward.0 == promotion_rank {
                    for piece in PROMOTION_PIECES {
                        moves.push(Move::promotion_to(from, forward, piece, false));
                    }
                } else {
                    moves.push(Move::quiet(from, forward));
                    if from.0 == color.pawn_start_rank() {
                        if let Some(double) = forward.offset(dir, 0) {
                            if self.is_empty(double) {
                                moves.push(Move::double_pawn_push(from, double));
                            }
                        }
                    }
                }
            }
        }

        let enemies = self.occupied_by(color.opponent()).0;
        let attacks = Bitboard(pawn_attacks(color, from.index()));
        for to in attacks.iter() {
            if enemies & Bitboard::from_square(to).0 != 0 {
                if to.0 == promotion_rank {
                    for piece in PROMOTION_PIECES {
                        moves.push(Move::promotion_to(from, to, piece, true));
                    }
                } else {
                    moves.push(Move::capture(from, to));
                }
            } else if self.en_passant_target == Some(to) {
                moves.push(Move::en_passant(from, to));
            }
        }
    }
}
