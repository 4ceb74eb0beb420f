use std::fmt;

use super::{Board, Square};

/// Placeholder for an empty square
const EMPTY_SQUARE: char = '·';

impl fmt::Display for Board {
    /// Unicode diagram, rank 8 at the top, with rank and file labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..8 {
                let glyph = self
                    .piece_at(Square(rank, file))
                    .map_or(EMPTY_SQUARE, |(color, piece)| piece.glyph(color));
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
