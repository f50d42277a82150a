//! Short games played move by move through the rule engine.

use crate::board::{Board, Color, Move, PieceKind, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Play `moves` from the initial position, asserting each one is legal.
fn play(moves: &[&str]) -> Board {
    let mut board = Board::standard();
    for text in moves {
        let mv: Move = text.parse().unwrap();
        board = board
            .contextualize(mv)
            .process()
            .unwrap_or_else(|| panic!("{text} should be legal on\n{board}"));
    }
    board
}

#[test]
fn test_open_game() {
    let board = play(&["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);
    assert_eq!(board.is_check(), None);
    assert!(board.occupant_at(sq("c4")).unwrap().is(PieceKind::Bishop));
    assert_eq!(board.all_pieces().count(), 32);
}

#[test]
fn test_white_castles_kingside_in_play() {
    let board = play(&["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"]);
    assert!(board.occupant_at(sq("g1")).unwrap().is(PieceKind::King));
    assert!(board.occupant_at(sq("f1")).unwrap().is(PieceKind::Rook));
}

#[test]
fn test_scholars_mate_gives_check() {
    let board = play(&["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"]);
    assert_eq!(board.is_check(), Some(Color::Black));
    assert!(board.check_status().is_checked(Color::Black));
    assert!(!board.check_status().is_checked(Color::White));
    // Bishop on c4 guards f7: no reply escapes.
    assert!(board.legal_moves(Color::Black).is_empty());
}

#[test]
fn test_captures_accumulate() {
    let board = play(&["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5e5"]);
    assert_eq!(board.all_pieces().count(), 30);
    assert_eq!(board.captured_pieces().len(), 2);
    assert_eq!(board.captured_pieces()[0].color(), Color::Black);
    assert_eq!(board.captured_pieces()[1].color(), Color::White);
    assert_eq!(board.is_check(), Some(Color::White));
}

#[test]
fn test_illegal_move_leaves_board_untouched() {
    let board = play(&["e2e4", "e7e5"]);
    let before = board.clone();
    let mv: Move = "e4e5".parse().unwrap();
    assert!(board.contextualize(mv).process().is_none());
    assert_eq!(board, before);
}
