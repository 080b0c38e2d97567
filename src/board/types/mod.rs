//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules
//! engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - (row, column) board coordinate
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `MoveRecord` - immutable history entry
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter, MoveRecord};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use piece::PROMOTION_PIECES;
