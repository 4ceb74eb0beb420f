//! Edge case tests for notation and special moves.

use crate::board::{Board, Color, MoveParseError, Piece, Square};

#[test]
fn test_parse_legal_move() {
    let mut board = Board::new();
    let mv = board.parse_move("e2e4").unwrap();
    assert_eq!(mv.from(), Square(1, 4));
    assert_eq!(mv.to(), Square(3, 4));
    assert!(mv.is_double_pawn_push());
    assert_eq!(mv.to_string(), "e2e4");
}

#[test]
fn test_parse_illegal_move() {
    let mut board = Board::new();
    assert_eq!(
        board.parse_move("e2e5"),
        Err(MoveParseError::IllegalMove {
            notation: "e2e5".to_string()
        })
    );
    // Moving the opponent's piece
    assert!(matches!(
        board.parse_move("e7e5"),
        Err(MoveParseError::IllegalMove { .. })
    ));
}

#[test]
fn test_parse_malformed_move() {
    let mut board = Board::new();
    for text in ["z9z9", "", "e2", "e2-e4", "e2e4x", "E2E4"] {
        assert_eq!(
            board.parse_move(text),
            Err(MoveParseError::MalformedNotation {
                notation: text.to_string()
            }),
            "{text}"
        );
    }
}

#[test]
fn test_parse_promotion_requires_letter() {
    let mut board = Board::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1");
    assert!(matches!(
        board.parse_move("a7a8"),
        Err(MoveParseError::IllegalMove { .. })
    ));
    let mv = board.parse_move("a7a8n").unwrap();
    assert_eq!(mv.promotion(), Some(Piece::Knight));
    assert!(matches!(
        board.parse_move("e2e4q"),
        Err(MoveParseError::IllegalMove { .. })
    ));
}

#[test]
fn test_parse_castling() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let mv = board.parse_move("e8c8").unwrap();
    assert!(mv.is_castle_queenside());
    let _ = board.apply(mv);
    assert_eq!(board.piece_at(Square(7, 3)), Some((Color::Black, Piece::Rook)));
    assert_eq!(board.piece_at(Square(7, 2)), Some((Color::Black, Piece::King)));
}

#[test]
fn test_underpromotion_applies() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    for (text, piece) in [
        ("a7a8q", Piece::Queen),
        ("a7a8r", Piece::Rook),
        ("a7a8b", Piece::Bishop),
        ("a7a8n", Piece::Knight),
    ] {
        let mv = board.parse_move(text).unwrap();
        let token = board.apply(mv);
        assert_eq!(board.piece_at(Square(7, 0)), Some((Color::White, piece)));
        board.undo(token);
        assert_eq!(board.piece_at(Square(6, 0)), Some((Color::White, Piece::Pawn)));
    }
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    // Rook on e2 is defended by the knight on c3
    let mut board = Board::from_fen("4k3/8/8/8/8/2n5/4r3/4K3 w - - 0 1");
    assert!(board.is_in_check(Color::White));
    assert!(matches!(
        board.parse_move("e1e2"),
        Err(MoveParseError::IllegalMove { .. })
    ));
}

#[test]
fn test_board_without_king_is_never_in_check() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/R7 w - - 0 1");
    assert_eq!(board.king_square(Color::White), None);
    assert!(!board.is_in_check(Color::White));
}
