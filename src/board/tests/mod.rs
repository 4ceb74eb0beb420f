//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generator node counts against reference values
//! - `make_unmake.rs` - Apply/undo correctness and legality
//! - `status.rs` - Checkmate, stalemate and insufficient material
//! - `eval.rs` - Material evaluation
//! - `search.rs` - Minimax and alpha-beta behaviour
//! - `edge_cases.rs` - Notation and special positions
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod search;

use rand::prelude::*;

use crate::board::Board;

/// Board reached by `plies` random legal moves from the start position,
/// stopping early if the game ends.
pub(super) fn random_playout(seed: u64, plies: usize) -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let _ = board.apply(mv);
    }
    board
}
