//! Square type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (rank, file).
///
/// Both coordinates are 0-7; rank 0 is the first rank, file 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(7 - self.0, self.1)
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Square displaced by `(d_rank, d_file)`, or None if it falls off the board.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, d_rank: isize, d_file: isize) -> Option<Self> {
        let rank = self.0 as isize + d_rank;
        let file = self.1 as isize + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// Parse a file letter `a`-`h` into 0-7.
    pub(crate) fn file_from_char(c: char) -> Option<usize> {
        match c {
            'a'..='h' => Some(c as usize - 'a' as usize),
            _ => None,
        }
    }

    /// Parse a rank digit `1`-`8` into 0-7.
    pub(crate) fn rank_from_char(c: char) -> Option<usize> {
        match c {
            '1'..='8' => Some(c as usize - '1' as usize),
            _ => None,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = Square::file_from_char(file).ok_or_else(invalid)?;
        let rank = Square::rank_from_char(rank).ok_or_else(invalid)?;
        Ok(Square(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_display() {
        assert_eq!(Square(0, 0).to_string(), "a1");
        assert_eq!(Square(3, 4).to_string(), "e4");
        assert_eq!(Square(7, 7).to_string(), "h8");
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("e2".parse::<Square>(), Ok(Square(1, 4)));
        assert!("z9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e22".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_index_round_trip() {
        for idx in 0..64 {
            assert_eq!(Square::from_index(idx).index(), idx);
        }
    }

    #[test]
    fn test_square_offset_bounds() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(7, 7).offset(0, 1), None);
        assert_eq!(Square(3, 3).offset(2, -1), Some(Square(5, 2)));
    }
}
