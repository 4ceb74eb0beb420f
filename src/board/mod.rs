//! Chess board representation and game logic.
//!
//! Uses bitboards for move generation and a fixed-depth minimax search with
//! alpha-beta pruning over a material evaluation. Supports full chess rules
//! including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use minimax_chess::board::{find_best_move, Board, SearchConfig};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves().len(), 20);
//!
//! let reply = find_best_move(&mut board, &SearchConfig::with_depth(2));
//! assert!(reply.is_some());
//! ```

mod attack_tables;
mod display;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
pub mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use eval::{evaluate, material_balance, MATE_SCORE};
pub use search::{
    find_best_move, minimax, search, SearchConfig, SearchResult, DEFAULT_SEARCH_DEPTH, INFINITY,
};
pub use state::{Board, UndoToken};
pub use status::GameStatus;
pub use types::{Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
