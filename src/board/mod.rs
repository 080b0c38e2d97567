//! Chess board representation and rules.
//!
//! Implements legal-move generation, check/checkmate/stalemate detection,
//! and the special moves (castling, en passant, promotion), plus a
//! caller-owned [`Session`] tracking castling rights, the en-passant
//! target, and the move history used for undo via replay.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Session, Square};
//!
//! let board = Board::new();
//! let session = Session::new();
//! let moves = session.legal_moves(&board, Square(6, 4));
//! println!("The e-pawn has {} legal moves", moves.len());
//! ```

mod builder;
mod classify;
mod error;
mod movegen;
mod replay;
mod session;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use classify::GameState;
pub use error::SquareError;
pub use replay::rebuild;
pub use session::{complete_promotion, promotion_pending, Session};
pub use state::Board;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, MoveListIntoIter, MoveRecord,
    Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;
