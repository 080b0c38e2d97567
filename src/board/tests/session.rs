//! Executor bookkeeping, undo, and promotion completion.

use crate::board::{
    complete_promotion, promotion_pending, Board, BoardBuilder, CastleSide, Color, Move, MoveKind,
    Piece, Session, Square,
};

#[test]
fn new_session_has_default_state() {
    let session = Session::new();

    assert!(session.castling_rights().has(Color::White, CastleSide::Kingside));
    assert!(session.castling_rights().has(Color::Black, CastleSide::Queenside));
    assert_eq!(session.en_passant_target(), None);
    assert!(session.history().is_empty());
}

#[test]
fn execute_relocates_and_records() {
    let board = Board::new();
    let mut session = Session::new();

    let mv = session
        .legal_moves(&board, Square(6, 4))
        .find_target(Square(5, 4))
        .unwrap();
    let next = session.execute(&board, mv);

    assert!(next.piece_at(Square(6, 4)).is_none());
    assert_eq!(next.piece_at(Square(5, 4)), Some((Color::White, Piece::Pawn)));
    // Input board untouched
    assert_eq!(board.piece_at(Square(6, 4)), Some((Color::White, Piece::Pawn)));

    assert_eq!(session.history().len(), 1);
    let record = session.history()[0];
    assert_eq!(record.from, Square(6, 4));
    assert_eq!(record.to, Square(5, 4));
    assert_eq!(record.piece, (Color::White, Piece::Pawn));
    assert_eq!(record.captured, None);
    assert_eq!(record.kind, MoveKind::Normal);
}

#[test]
fn quiet_moves_are_recorded_too() {
    let board = Board::new();
    let mut session = Session::new();

    let board = session.execute(&board, Move::normal(Square(7, 1), Square(5, 2)));
    let _ = session.execute(&board, Move::normal(Square(0, 1), Square(2, 2)));

    assert_eq!(session.history().len(), 2);
    assert!(session.captured_pieces().next().is_none());
}

#[test]
fn capture_is_recorded_and_tallied() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(4, 4), Color::White, Piece::Rook)
        .piece(Square(4, 7), Color::Black, Piece::Bishop)
        .build();
    let mut session = Session::new();

    let mv = session
        .legal_moves(&board, Square(4, 4))
        .find_target(Square(4, 7))
        .unwrap();
    let _ = session.execute(&board, mv);

    let captured: Vec<_> = session.captured_pieces().collect();
    assert_eq!(captured, vec![(Color::Black, Piece::Bishop)]);
}

#[test]
fn execute_on_empty_square_is_inert() {
    let board = Board::new();
    let mut session = Session::new();

    let next = session.execute(&board, Move::normal(Square(4, 4), Square(3, 4)));

    assert_eq!(next, board);
    assert!(session.history().is_empty());
}

#[test]
fn undo_restores_starting_position() {
    let board = Board::new();
    let mut session = Session::new();

    let mv = session
        .legal_moves(&board, Square(6, 4))
        .find_target(Square(4, 4))
        .unwrap();
    let after = session.execute(&board, mv);
    assert_eq!(session.en_passant_target(), Some(Square(4, 4)));

    let restored = session.undo(&after);

    assert_eq!(restored, Board::new());
    assert_eq!(session.en_passant_target(), None);
    assert!(session.history().is_empty());
}

#[test]
fn undo_restores_rights_and_target() {
    let board = Board::new();
    let mut session = Session::new();

    // 1. e4 (double step) ... Nf6, then 2. Ke2 throwing away both rights
    let board = session.execute(&board, Move::double_step(Square(6, 4), Square(4, 4)));
    let board = session.execute(&board, Move::normal(Square(0, 6), Square(2, 5)));
    let before_king_move = board.clone();
    let board = session.execute(&board, Move::normal(Square(7, 4), Square(6, 4)));
    assert!(!session.castling_rights().has(Color::White, CastleSide::Kingside));

    let restored = session.undo(&board);

    assert_eq!(restored, before_king_move);
    assert!(session.castling_rights().has(Color::White, CastleSide::Kingside));
    assert!(session.castling_rights().has(Color::White, CastleSide::Queenside));
    // The knight reply had already expired the en-passant target
    assert_eq!(session.en_passant_target(), None);
}

#[test]
fn undo_twice_restores_double_step_target() {
    let board = Board::new();
    let mut session = Session::new();

    let board = session.execute(&board, Move::double_step(Square(6, 4), Square(4, 4)));
    let board = session.execute(&board, Move::double_step(Square(1, 3), Square(3, 3)));
    assert_eq!(session.en_passant_target(), Some(Square(3, 3)));

    let _ = session.undo(&board);

    // Back to the position right after 1. e4: White's double step is the
    // tail record again
    assert_eq!(session.en_passant_target(), Some(Square(4, 4)));
}

#[test]
fn undo_on_empty_history_is_noop() {
    let board = Board::new();
    let mut session = Session::new();

    let restored = session.undo(&board);

    assert_eq!(restored, board);
    assert!(session.history().is_empty());
    assert_eq!(session.en_passant_target(), None);
}

#[test]
fn promotion_pending_finds_pawn_on_last_rank() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(1, 0), Color::White, Piece::Pawn)
        .build();
    let mut session = Session::new();

    assert_eq!(promotion_pending(&board), None);

    let mv = session
        .legal_moves(&board, Square(1, 0))
        .find_target(Square(0, 0))
        .unwrap();
    let board = session.execute(&board, mv);

    assert_eq!(promotion_pending(&board), Some(Square(0, 0)));
}

#[test]
fn complete_promotion_writes_chosen_piece() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(0, 0), Color::White, Piece::Pawn)
        .build();

    let promoted = complete_promotion(&board, Square(0, 0), Piece::Knight);
    assert_eq!(
        promoted.piece_at(Square(0, 0)),
        Some((Color::White, Piece::Knight))
    );
}

#[test]
fn complete_promotion_rejects_invalid_requests() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(0, 0), Color::White, Piece::Pawn)
        .piece(Square(4, 4), Color::White, Piece::Pawn)
        .build();

    // King is not a promotion choice
    assert_eq!(complete_promotion(&board, Square(0, 0), Piece::King), board);
    // A pawn not on its farthest rank stays a pawn
    assert_eq!(complete_promotion(&board, Square(4, 4), Piece::Queen), board);
    // Empty and non-pawn squares are left alone
    assert_eq!(complete_promotion(&board, Square(3, 3), Piece::Queen), board);
    assert_eq!(complete_promotion(&board, Square(7, 4), Piece::Queen), board);
}

#[test]
fn promotion_survives_for_black_too() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, Piece::King)
        .piece(Square(0, 4), Color::Black, Piece::King)
        .piece(Square(7, 0), Color::Black, Piece::Pawn)
        .build();

    assert_eq!(promotion_pending(&board), Some(Square(7, 0)));
    let promoted = complete_promotion(&board, Square(7, 0), Piece::Queen);
    assert_eq!(
        promoted.piece_at(Square(7, 0)),
        Some((Color::Black, Piece::Queen))
    );
}

#[cfg(feature = "serde")]
#[test]
fn history_round_trips_through_serde() {
    let board = Board::new();
    let mut session = Session::new();
    let board = session.execute(&board, Move::double_step(Square(6, 4), Square(4, 4)));
    let _ = session.execute(&board, Move::normal(Square(0, 6), Square(2, 5)));

    let json = serde_json::to_string(session.history()).unwrap();
    let restored: Vec<crate::board::MoveRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.as_slice(), session.history());
}
