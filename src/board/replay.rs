//! Board reconstruction from a move history.

use super::types::MoveRecord;
use super::Board;

/// Rebuild a board by replaying a history from the canonical starting
/// position.
///
/// Each record re-applies the same relocation, castling, and en-passant
/// side-effects the executor performed; captured-piece bookkeeping is
/// skipped because the destination overwrite removes a captured piece on
/// its own. A pure function of the record sequence: replaying the same
/// history twice yields the same board. Used to implement undo, where the
/// caller drops the tail record and rebuilds from the remainder.
#[must_use]
pub fn rebuild(history: &[MoveRecord]) -> Board {
    let mut board = Board::new();
    for record in history {
        board = board.apply_move(record.as_move());
    }
    board
}
