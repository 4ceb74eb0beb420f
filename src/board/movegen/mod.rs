//! Move generation.
//!
//! Pseudo-legal moves follow piece movement rules only; legal moves are the
//! pseudo-legal ones that survive an apply / king-safety check / undo round
//! trip. Generation order is fixed: piece types Pawn..King, origin squares
//! ascending, then destinations ascending, so a given position always yields
//! the same sequence.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{
    bishop_attacks, pawn_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS,
};
use super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Moves obeying piece movement rules, ignoring whether they expose the
    /// mover's own king.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move();

        for from in self.pieces_of(color, Piece::Pawn).iter() {
            self.generate_pawn_moves(from, &mut moves);
        }
        for from in self.pieces_of(color, Piece::Knight).iter() {
            self.generate_knight_moves(from, &mut moves);
        }
        for slider in [Piece::Bishop, Piece::Rook, Piece::Queen] {
            for from in self.pieces_of(color, slider).iter() {
                self.generate_slider_moves(from, slider, &mut moves);
            }
        }
        for from in self.pieces_of(color, Piece::King).iter() {
            self.generate_king_moves(from, &mut moves);
        }
        moves
    }

    /// Moves that do not leave the mover's own king attacked.
    ///
    /// Takes `&mut self` because each candidate is tried on the board itself;
    /// the position is unchanged on return.
    pub fn legal_moves(&mut self) -> MoveList {
        let color = self.side_to_move();
        let opponent = color.opponent();
        let mut legal = MoveList::new();

        for &mv in &self.pseudo_legal_moves() {
            if mv.is_castling() {
                let (from, to) = (mv.from(), mv.to());
                let transit = Square(from.0, (from.1 + to.1) / 2);
                if [from, transit, to]
                    .into_iter()
                    .any(|sq| self.is_square_attacked(sq, opponent))
                {
                    continue;
                }
            }

            let token = self.apply(mv);
            if !self.is_in_check(color) {
                legal.push(mv);
            }
            self.undo(token);
        }
        legal
    }

    /// Is `square` attacked by any piece of `by`?
    ///
    /// Occupancy of `square` itself is irrelevant, so this also answers
    /// "could a king stand here" for empty squares.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let idx = square.index();
        let occ = self.all_occupied.0;
        let attackers = |piece| self.pieces_of(by, piece).0;

        if attackers(Piece::Pawn) & pawn_attacks(by.opponent(), idx) != 0 {
            return true;
        }
        if attackers(Piece::Knight) & KNIGHT_ATTACKS[idx] != 0 {
            return true;
        }
        if attackers(Piece::King) & KING_ATTACKS[idx] != 0 {
            return true;
        }
        let queens = attackers(Piece::Queen);
        if (attackers(Piece::Rook) | queens) & rook_attacks(idx, occ) != 0 {
            return true;
        }
        (attackers(Piece::Bishop) | queens) & bishop_attacks(idx, occ) != 0
    }

    /// Is `color`'s king attacked? False when `color` has no king.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|sq| self.is_square_attacked(sq, color.opponent()))
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in &moves {
            let token = self.apply(mv);
            nodes += self.perft(depth - 1);
            self.undo(token);
        }
        nodes
    }

    /// Quiet move or capture, depending on what stands on `to`
    #[inline]
    fn plain_move(&self, from: Square, to: Square) -> Move {
        if self.is_empty(to) {
            Move::quiet(from, to)
        } else {
            Move::capture(from, to)
        }
    }

    /// Push a move for every target square, in ascending square order
    fn push_targets(&self, from: Square, targets: Bitboard, moves: &mut MoveList) {
        for to in targets.iter() {
            moves.push(self.plain_move(from, to));
        }
    }
}
