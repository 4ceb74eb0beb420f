//! Search tests.

use super::random_playout;
use crate::board::{
    find_best_move, minimax, search, Board, Color, SearchConfig, INFINITY, MATE_SCORE,
};

const BACK_RANK_MATE: &str = "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1";
const PROMOTION_MATE: &str = "7k/4P1pp/8/8/8/8/8/6K1 w - - 0 1";

fn config(depth: u32, pruning: bool) -> SearchConfig {
    SearchConfig { depth, pruning }
}

#[test]
fn test_default_config() {
    let config = SearchConfig::default();
    assert_eq!(config.depth, 3);
    assert!(config.pruning);
}

#[test]
fn test_finds_back_rank_mate() {
    for depth in 1..=3 {
        let mut board = Board::from_fen(BACK_RANK_MATE);
        let result = search(&mut board, &config(depth, true));
        assert_eq!(
            result.best_move.map(|m| m.to_string()),
            Some("a1a8".to_string()),
            "depth {depth}"
        );
        assert_eq!(result.score, MATE_SCORE, "depth {depth}");
    }
}

#[test]
fn test_finds_promotion_mate() {
    for depth in 1..=3 {
        let mut board = Board::from_fen(PROMOTION_MATE);
        let result = search(&mut board, &config(depth, true));
        assert_eq!(
            result.best_move.map(|m| m.to_string()),
            Some("e7e8q".to_string()),
            "depth {depth}"
        );
        assert_eq!(result.score, MATE_SCORE);
    }
}

#[test]
fn test_black_finds_mate() {
    let mut board = Board::from_fen(BACK_RANK_MATE).color_flipped();
    assert_eq!(board.to_fen(), "r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1");
    let result = search(&mut board, &config(2, true));
    assert_eq!(result.best_move.map(|m| m.to_string()), Some("a8a1".to_string()));
    assert_eq!(result.score, -MATE_SCORE);
}

#[test]
fn test_takes_hanging_queen() {
    let mut board = Board::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let best = find_best_move(&mut board, &config(1, true));
    assert_eq!(best.map(|m| m.to_string()), Some("d2d5".to_string()));
}

#[test]
fn test_game_over_returns_no_move() {
    let mut mated = Board::from_fen("R5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 1 1");
    let result = search(&mut mated, &config(3, true));
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, MATE_SCORE);
    assert_eq!(result.nodes, 1);

    let mut stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let result = search(&mut stalemate, &config(3, true));
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

#[test]
fn test_depth_zero_is_static_eval() {
    let mut board = Board::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let (score, mv) = minimax(&mut board, 0, -INFINITY, INFINITY, true);
    assert_eq!(score, -4);
    assert_eq!(mv, None);
}

#[test]
fn test_search_restores_board() {
    for fen in [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    ] {
        let mut board = Board::from_fen(fen);
        let original = board.clone();
        let _ = search(&mut board, &config(2, true));
        assert_eq!(board, original, "{fen}");
    }
}

#[test]
fn test_alpha_beta_matches_minimax() {
    let mut board = Board::new();
    let pruned = search(&mut board, &config(3, true));
    let full = search(&mut board, &config(3, false));
    assert_eq!(pruned.score, full.score);
    assert_eq!(pruned.best_move, full.best_move);
    assert!(pruned.nodes < full.nodes);

    for fen in [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        BACK_RANK_MATE,
    ] {
        let mut board = Board::from_fen(fen);
        for depth in 1..=2 {
            let pruned = search(&mut board, &config(depth, true));
            let full = search(&mut board, &config(depth, false));
            assert_eq!(pruned.score, full.score, "{fen} depth {depth}");
        }
    }
}

#[test]
fn test_deterministic_best_move() {
    for seed in 0..4 {
        let board = random_playout(seed, 12);
        let first = search(&mut board.clone(), &config(2, true));
        let second = search(&mut board.clone(), &config(2, true));
        assert_eq!(first, second, "seed {seed}");
    }
}

#[test]
fn test_maximizing_follows_side_to_move() {
    // Black to move with a free queen capture: the score is taken from
    // White's point of view, so Black's best line lowers it
    let mut board = Board::from_fen("4k3/8/8/3Q4/8/8/3r4/4K3 b - - 0 1");
    assert_eq!(board.side_to_move(), Color::Black);
    let result = search(&mut board, &config(1, true));
    assert_eq!(result.best_move.map(|m| m.to_string()), Some("d2d5".to_string()));
    assert_eq!(result.score, -5);
}
