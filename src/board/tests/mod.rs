//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - per-piece pseudo-legal and legal move generation
//! - `castling.rs` - castling gate, execution, and rights updates
//! - `en_passant.rs` - en-passant target lifetime and capture
//! - `classify.rs` - check/checkmate/stalemate classification
//! - `session.rs` - executor bookkeeping, undo, promotion
//! - `replay.rs` - history replay
//! - `proptest.rs` - property-based tests

mod classify;
mod session;

use crate::board::{Board, Color, Move, Session, Square};

/// Collect the legal moves of every piece of `color`, 64-square scan.
pub(crate) fn all_legal_moves(session: &Session, board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let sq = Square(row, col);
            if matches!(board.piece_at(sq), Some((c, _)) if c == color) {
                moves.extend(session.legal_moves(board, sq).iter().copied());
            }
        }
    }
    moves
}
