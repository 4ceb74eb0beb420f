//! Coordinate move notation (`e2e4`, `e7e8q`).

use super::error::MoveParseError;
use super::{Board, Move, Piece, Square};

/// Origin, destination and optional promotion piece read from notation,
/// without reference to any position.
fn parse_coordinates(text: &str) -> Option<(Square, Square, Option<Piece>)> {
    let chars: Vec<char> = text.chars().collect();
    if !(4..=5).contains(&chars.len()) {
        return None;
    }

    let square = |file: char, rank: char| {
        Some(Square(
            Square::rank_from_char(rank)?,
            Square::file_from_char(file)?,
        ))
    };
    let from = square(chars[0], chars[1])?;
    let to = square(chars[2], chars[3])?;

    let promotion = match chars.get(4) {
        None => None,
        Some('q') => Some(Piece::Queen),
        Some('r') => Some(Piece::Rook),
        Some('b') => Some(Piece::Bishop),
        Some('n') => Some(Piece::Knight),
        Some(_) => return None,
    };
    Some((from, to, promotion))
}

impl Board {
    /// Resolve coordinate notation against the legal moves of this position.
    ///
    /// # Example
    /// ```
    /// use minimax_chess::board::{Board, MoveParseError};
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// assert!(matches!(
    ///     board.parse_move("e2e5"),
    ///     Err(MoveParseError::IllegalMove { .. })
    /// ));
    /// ```
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let (from, to, promotion) =
            parse_coordinates(text).ok_or_else(|| MoveParseError::MalformedNotation {
                notation: text.to_string(),
            })?;

        self.legal_moves()
            .iter()
            .copied()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            parse_coordinates("a1h8"),
            Some((Square(0, 0), Square(7, 7), None))
        );
        assert_eq!(
            parse_coordinates("e7e8n"),
            Some((Square(6, 4), Square(7, 4), Some(Piece::Knight)))
        );
        for bad in ["", "e2", "e2e", "e2e4qq", "i2e4", "e0e4", "e2e9", "e7e8k", "e7e8Q"] {
            assert_eq!(parse_coordinates(bad), None, "{bad}");
        }
    }
}
