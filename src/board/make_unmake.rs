use super::{Board, Color, Move, Piece, Square, UndoToken};

/// Rook from/to files for a castle whose king lands on `king_to_file`
#[inline]
fn castle_rook_files(king_to_file: usize) -> (usize, usize) {
    if king_to_file == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

/// Square of the pawn taken by an en passant capture landing on `to`
#[inline]
fn en_passant_victim(to: Square, mover: Color) -> Square {
    match mover {
        Color::White => Square(to.0 - 1, to.1),
        Color::Black => Square(to.0 + 1, to.1),
    }
}

impl Board {
    /// Play `mv` on the board and return the token that reverses it.
    ///
    /// `mv` must come from `legal_moves` (or `pseudo_legal_moves`) for this
    /// exact position; anything else leaves the board in an unspecified state.
    pub fn apply(&mut self, mv: Move) -> UndoToken {
        let color = self.side_to_move();
        let opponent = color.opponent();
        let (from, to) = (mv.from(), mv.to());

        let token = UndoToken {
            mv,
            captured: None,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        };

        let Some((_, moving_piece)) = self.piece_at(from) else {
            debug_assert!(false, "apply: no piece on {from} for {mv}");
            return token;
        };

        let mut captured = None;
        if mv.is_en_passant() {
            self.remove_piece(en_passant_victim(to, color), opponent, Piece::Pawn);
            captured = Some(Piece::Pawn);
        } else if let Some((_, victim)) = self.piece_at(to) {
            self.remove_piece(to, opponent, victim);
            captured = Some(victim);
        }

        self.remove_piece(from, color, moving_piece);
        self.set_piece(to, color, mv.promotion().unwrap_or(moving_piece));

        if mv.is_castling() {
            let (rook_from, rook_to) = castle_rook_files(to.1);
            self.remove_piece(Square(to.0, rook_from), color, Piece::Rook);
            self.set_piece(Square(to.0, rook_to), color, Piece::Rook);
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square((from.0 + to.0) / 2, from.1))
        } else {
            None
        };

        if moving_piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        for (sq, owner) in [(from, color), (to, opponent)] {
            if sq.0 == owner.back_rank() {
                match sq.1 {
                    0 => self.castling_rights.remove(owner, false),
                    7 => self.castling_rights.remove(owner, true),
                    _ => {}
                }
            }
        }

        if moving_piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.white_to_move = !self.white_to_move;

        UndoToken { captured, ..token }
    }

    /// Take back the move recorded in `token`, restoring the exact prior state.
    pub fn undo(&mut self, token: UndoToken) {
        let mv = token.mv;
        self.white_to_move = !self.white_to_move;
        let color = self.side_to_move();
        let (from, to) = (mv.from(), mv.to());

        self.castling_rights = token.previous_castling_rights;
        self.en_passant_target = token.previous_en_passant_target;
        self.halfmove_clock = token.previous_halfmove_clock;
        self.fullmove_number = token.previous_fullmove_number;

        if mv.is_castling() {
            let (rook_from, rook_to) = castle_rook_files(to.1);
            self.remove_piece(Square(to.0, rook_to), color, Piece::Rook);
            self.set_piece(Square(to.0, rook_from), color, Piece::Rook);
        }

        let placed = match self.piece_at(to) {
            Some((_, piece)) => piece,
            None => {
                debug_assert!(false, "undo: destination {to} of {mv} is empty");
                return;
            }
        };
        self.remove_piece(to, color, placed);
        let original = if mv.promotion().is_some() {
            Piece::Pawn
        } else {
            placed
        };
        self.set_piece(from, color, original);

        if let Some(victim) = token.captured {
            let victim_sq = if mv.is_en_passant() {
                en_passant_victim(to, color)
            } else {
                to
            };
            self.set_piece(victim_sq, color.opponent(), victim);
        }
    }
}
