use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are optional and default to
    /// 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { ranks: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                board.set_piece(Square(7 - rank_idx, file), color, piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        board.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.castling_rights = rights;

        board.en_passant_target = match parts[3] {
            "-" => None,
            sq => {
                let invalid = || FenError::InvalidEnPassant {
                    found: sq.to_string(),
                };
                let target = sq.parse::<Square>().map_err(|_| invalid())?;
                if !board.en_passant_consistent(target) {
                    return Err(invalid());
                }
                Some(target)
            }
        };

        let counter = |s: &str| {
            s.parse::<u32>().map_err(|_| FenError::InvalidCounter {
                found: s.to_string(),
            })
        };
        if let Some(halfmove) = parts.get(4) {
            board.halfmove_clock = counter(halfmove)?;
        }
        if let Some(fullmove) = parts.get(5) {
            board.fullmove_number = counter(fullmove)?;
        }

        Ok(board)
    }

    /// The target must sit behind a pawn the opponent just double-pushed:
    /// rank 6 with White to move, rank 3 with Black to move, empty, with
    /// the pushed pawn directly in front of it.
    fn en_passant_consistent(&self, target: Square) -> bool {
        let pusher = self.side_to_move().opponent();
        let (target_rank, pawn_rank) = match pusher {
            Color::White => (2, 3),
            Color::Black => (5, 4),
        };
        target.0 == target_rank
            && self.piece_at(target).is_none()
            && self.piece_at(Square(pawn_rank, target.1)) == Some((pusher, Piece::Pawn))
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling_rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
