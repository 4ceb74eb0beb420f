//! Game-state classification: checkmate, stalemate, insufficient material.

use super::{Bitboard, Board, Color, MoveList, Piece};

/// Outcome classification of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check with no legal move
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

impl GameStatus {
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    #[must_use]
    pub const fn is_checkmate(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. })
    }

    #[must_use]
    pub const fn is_stalemate(self) -> bool {
        matches!(self, GameStatus::Stalemate)
    }
}

impl Board {
    /// Classify the position given its already-generated legal moves.
    ///
    /// Checkmate and stalemate take precedence over insufficient material.
    #[must_use]
    pub fn status_with(&self, legal: &MoveList) -> GameStatus {
        let color = self.side_to_move();
        if legal.is_empty() {
            if self.is_in_check(color) {
                GameStatus::Checkmate {
                    winner: color.opponent(),
                }
            } else {
                GameStatus::Stalemate
            }
        } else if self.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else {
            GameStatus::Ongoing
        }
    }

    /// Classify the position, generating legal moves internally.
    pub fn status(&mut self) -> GameStatus {
        let legal = self.legal_moves();
        self.status_with(&legal)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.status().is_checkmate()
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.status().is_stalemate()
    }

    pub fn is_game_over(&mut self) -> bool {
        self.status().is_game_over()
    }

    /// Neither side can ever deliver mate.
    ///
    /// True when there are no pawns, rooks or queens, and either at most one
    /// minor piece remains or every remaining minor is a bishop and all of
    /// them stand on squares of the same color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let both = |piece| {
            self.pieces_of(Color::White, piece).0 | self.pieces_of(Color::Black, piece).0
        };

        if both(Piece::Pawn) | both(Piece::Rook) | both(Piece::Queen) != 0 {
            return false;
        }

        let knights = Bitboard(both(Piece::Knight));
        let bishops = Bitboard(both(Piece::Bishop));
        if knights.popcount() + bishops.popcount() <= 1 {
            return true;
        }

        knights.is_empty()
            && (bishops.0 & Bitboard::LIGHT_SQUARES.0 == 0
                || bishops.0 & Bitboard::DARK_SQUARES.0 == 0)
    }
}
