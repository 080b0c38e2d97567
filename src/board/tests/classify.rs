//! Check, checkmate, and stalemate classification.

use crate::board::{Board, BoardBuilder, Color, GameState, Piece, Session, Square};

fn play(session: &mut Session, board: Board, from: Square, to: Square) -> Board {
    let mv = session
        .legal_moves(&board, from)
        .find_target(to)
        .unwrap_or_else(|| panic!("no legal move {from:?} -> {to:?}"));
    session.execute(&board, mv)
}

#[test]
fn starting_position_is_playing() {
    let board = Board::new();
    let session = Session::new();

    assert_eq!(session.classify(&board, Color::White), GameState::Playing);
    assert_eq!(session.classify(&board, Color::Black), GameState::Playing);
}

#[test]
fn fools_mate_is_checkmate() {
    let mut session = Session::new();
    let board = Board::new();

    // 1. f3 e5 2. g4 Qh4#
    let board = play(&mut session, board, Square(6, 5), Square(5, 5));
    let board = play(&mut session, board, Square(1, 4), Square(3, 4));
    let board = play(&mut session, board, Square(6, 6), Square(4, 6));
    let board = play(&mut session, board, Square(0, 3), Square(4, 7));

    assert!(board.is_king_in_check(Color::White));
    assert_eq!(session.classify(&board, Color::White), GameState::Checkmate);
    assert_eq!(session.classify(&board, Color::Black), GameState::Playing);
}

#[test]
fn cornered_king_with_no_moves_is_stalemate() {
    // Black king on a8, white queen on c7, white king on b6: black has no
    // move and is not in check
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::Black, Piece::King)
        .piece(Square(1, 2), Color::White, Piece::Queen)
        .piece(Square(2, 1), Color::White, Piece::King)
        .build();
    let session = Session::new();

    assert!(!board.is_king_in_check(Color::Black));
    assert_eq!(session.classify(&board, Color::Black), GameState::Stalemate);
}

#[test]
fn attacked_king_with_escape_is_check() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(4, 4), Color::White, Piece::Rook)
        .piece(Square(7, 4), Color::White, Piece::King)
        .build();
    let session = Session::new();

    assert!(board.is_king_in_check(Color::Black));
    assert_eq!(session.classify(&board, Color::Black), GameState::Check);
}

#[test]
fn back_rank_mate_is_checkmate() {
    // Black king boxed in by its own pawns, white rook delivers on the rank
    let board = BoardBuilder::new()
        .piece(Square(0, 6), Color::Black, Piece::King)
        .piece(Square(1, 5), Color::Black, Piece::Pawn)
        .piece(Square(1, 6), Color::Black, Piece::Pawn)
        .piece(Square(1, 7), Color::Black, Piece::Pawn)
        .piece(Square(0, 0), Color::White, Piece::Rook)
        .piece(Square(7, 4), Color::White, Piece::King)
        .build();
    let session = Session::new();

    assert_eq!(session.classify(&board, Color::Black), GameState::Checkmate);
}

#[test]
fn missing_king_classifies_as_playing() {
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::White, Piece::Rook)
        .build();
    let session = Session::new();

    assert!(!board.is_king_in_check(Color::Black));
    assert_eq!(session.classify(&board, Color::Black), GameState::Playing);
}

#[test]
fn empty_board_is_not_in_check() {
    let board = BoardBuilder::new().build();

    assert!(!board.is_king_in_check(Color::White));
    assert!(!board.is_king_in_check(Color::Black));
}
