//! Static evaluation by material count.
//!
//! Scores are always from White's point of view: positive favours White.

use super::{Board, Color, GameStatus, Piece};

/// Score assigned to a checkmated position, signed by the winner.
pub const MATE_SCORE: i32 = 9999;

/// Score a position whose status has already been classified.
///
/// Terminal statuses override material: mate is `±MATE_SCORE`, draws are 0.
#[must_use]
pub fn evaluate(board: &Board, status: GameStatus) -> i32 {
    match status {
        GameStatus::Checkmate { winner } => winner.sign() * MATE_SCORE,
        GameStatus::Stalemate | GameStatus::InsufficientMaterial => 0,
        GameStatus::Ongoing => material_balance(board),
    }
}

/// White material minus Black material, in pawns.
#[must_use]
pub fn material_balance(board: &Board) -> i32 {
    Piece::ALL
        .iter()
        .map(|&piece| {
            let white = board.pieces_of(Color::White, piece).popcount() as i32;
            let black = board.pieces_of(Color::Black, piece).popcount() as i32;
            (white - black) * piece.value()
        })
        .sum()
}
