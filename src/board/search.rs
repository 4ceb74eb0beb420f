//! Fixed-depth minimax search with optional alpha-beta pruning.
//!
//! The search walks legal moves in generator order on a single board using
//! apply/undo, scoring leaves and terminal positions with the material
//! evaluator. White maximizes, Black minimizes. Among equally scored moves
//! the first one generated wins, which makes the chosen move deterministic.

use std::time::Instant;

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::eval::evaluate;
use super::{Board, Color, Move};

/// Search depth used when none is configured.
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Initial alpha-beta window bound, larger than any evaluation.
pub const INFINITY: i32 = 1_000_000;

/// Search parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies to search
    pub depth: u32,
    /// Alpha-beta cutoffs. When off the search is plain minimax and returns
    /// the same score, only slower.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            pruning: true,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// None only when the root position is already over, or depth is 0
    pub best_move: Option<Move>,
    /// Score from White's point of view
    pub score: i32,
    /// Positions visited, root included
    pub nodes: u64,
}

struct SearchContext<'a> {
    board: &'a mut Board,
    pruning: bool,
    root_depth: u32,
    nodes: u64,
}

impl SearchContext<'_> {
    fn minimax(
        &mut self,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        let legal = self.board.legal_moves();
        let status = self.board.status_with(&legal);
        if depth == 0 || status.is_game_over() {
            return (evaluate(self.board, status), None);
        }

        let mut best_move = None;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };

        for &mv in &legal {
            let token = self.board.apply(mv);
            let (score, _) = self.minimax(depth - 1, alpha, beta, !maximizing);
            self.board.undo(token);

            if depth == self.root_depth {
                trace!("root move {mv} scored {score}");
            }

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        debug_assert!(
            best_move.is_some(),
            "non-terminal position produced no move: {}",
            self.board.to_fen()
        );
        (best_score, best_move)
    }
}

/// Alpha-beta minimax from `board` to `depth` plies.
///
/// Returns the score from White's point of view and the best move, or None
/// for leaves and finished games. `board` is left exactly as it was.
pub fn minimax(
    board: &mut Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> (i32, Option<Move>) {
    let mut ctx = SearchContext {
        board,
        pruning: true,
        root_depth: depth,
        nodes: 0,
    };
    ctx.minimax(depth, alpha, beta, maximizing)
}

/// Search the side to move's best move with the full window.
pub fn search(board: &mut Board, config: &SearchConfig) -> SearchResult {
    let start = Instant::now();
    let maximizing = board.side_to_move() == Color::White;

    let mut ctx = SearchContext {
        board,
        pruning: config.pruning,
        root_depth: config.depth,
        nodes: 0,
    };
    let (score, best_move) = ctx.minimax(config.depth, -INFINITY, INFINITY, maximizing);
    let nodes = ctx.nodes;

    debug!(
        "search depth {} pruning {} score {} nodes {} best {} in {:.3}s",
        config.depth,
        config.pruning,
        score,
        nodes,
        best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        start.elapsed().as_secs_f64()
    );

    SearchResult {
        best_move,
        score,
        nodes,
    }
}

/// Best move for the side to move, or None if the game is already over.
pub fn find_best_move(board: &mut Board, config: &SearchConfig) -> Option<Move> {
    search(board, config).best_move
}
