//! A small chess program: bitboard move generation, material evaluation and
//! a fixed-depth minimax search with alpha-beta pruning, plus a text driver
//! for playing against it.

pub mod board;
pub mod game;

pub use board::{Board, Color, GameStatus, Move, Piece, SearchConfig, Square};
pub use game::{Game, GameConfig, GameOutcome};
