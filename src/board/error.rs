//! Error types for board operations.

use thiserror::Error;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// FEN string has too few fields (needs at least 4)
    #[error("FEN must have at least 4 parts, found {found}")]
    TooFewParts { found: usize },
    #[error("Invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    /// More or fewer than 8 ranks in the placement field
    #[error("Invalid rank count {ranks} in FEN, expected 8")]
    InvalidRank { ranks: usize },
    #[error("Too many files ({files}) in rank {rank}")]
    TooManyFiles { rank: usize, files: usize },
    #[error("Too few files ({files}) in rank {rank}")]
    TooFewFiles { rank: usize, files: usize },
    #[error("Invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    #[error("Invalid castling character '{char}' in FEN")]
    InvalidCastling { char: char },
    #[error("Invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a number
    #[error("Invalid move counter '{found}' in FEN")]
    InvalidCounter { found: String },
}

/// Error type for coordinate-notation move input.
///
/// The two variants are reported differently to the player: one means the
/// text could not be read as a move at all, the other that the move is
/// readable but not playable in the current position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// Wrong length, bad file/rank character or bad promotion letter
    #[error("Malformed move notation '{notation}'")]
    MalformedNotation { notation: String },
    /// Well-formed, but not among the legal moves
    #[error("Illegal move '{notation}'")]
    IllegalMove { notation: String },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_move_error_malformed() {
        let err = MoveParseError::MalformedNotation {
            notation: "z9z9".to_string(),
        };
        assert!(err.to_string().contains("z9z9"));
        assert!(err.to_string().starts_with("Malformed"));
    }

    #[test]
    fn test_move_error_illegal() {
        let err = MoveParseError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
        assert_ne!(
            err,
            MoveParseError::MalformedNotation {
                notation: "e2e5".to_string()
            }
        );
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }
}
