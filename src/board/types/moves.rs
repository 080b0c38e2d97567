//! Move types, the move list, and the history record.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;

/// What kind of move this is.
///
/// A closed set: every move a generator emits is exactly one of these,
/// and the executor and replay dispatch on it once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// An ordinary relocation, capturing or not
    Normal,
    /// A pawn advancing two squares from its starting row
    DoubleStep,
    /// A pawn capturing onto the en-passant target square
    EnPassant,
    /// The king moving two squares toward a rook
    Castle(CastleSide),
}

/// A candidate or chosen move: source, destination, and kind.
///
/// The moved piece is not stored; it is read from the board the move was
/// generated against. Executing a move against a different board is
/// undefined by contract.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Create an ordinary move
    #[inline]
    #[must_use]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Normal,
        }
    }

    /// Create a pawn double-step move
    #[inline]
    #[must_use]
    pub const fn double_step(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::DoubleStep,
        }
    }

    /// Create an en-passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::EnPassant,
        }
    }

    /// Create a castling move
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Castle(side),
        }
    }

    /// Returns true if this move is castling (either side)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    /// The castling side, if this is a castling move
    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }

    /// Returns true if this move is an en-passant capture
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Returns true if this move is a pawn double-step
    #[inline]
    #[must_use]
    pub const fn is_double_step(self) -> bool {
        matches!(self.kind, MoveKind::DoubleStep)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        match self.kind {
            MoveKind::Normal => {}
            MoveKind::DoubleStep => write!(f, " double")?,
            MoveKind::EnPassant => write!(f, " ep")?,
            MoveKind::Castle(CastleSide::Kingside) => write!(f, " O-O")?,
            MoveKind::Castle(CastleSide::Queenside) => write!(f, " O-O-O")?,
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// An immutable history entry: one executed move with its bookkeeping.
///
/// Records are append-only; undo pops the tail. Promotion is not part of
/// the record - replay reconstructs the pawn's relocation and the caller
/// re-applies any promotion choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The moved piece, as (color, kind)
    pub piece: (Color, Piece),
    /// The piece that stood on the destination before the move, if any
    pub captured: Option<(Color, Piece)>,
    pub kind: MoveKind,
}

impl MoveRecord {
    /// The move this record describes
    #[inline]
    #[must_use]
    pub const fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
            kind: self.kind,
        }
    }
}

/// List of candidate moves.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Returns true if any move in the list lands on `to`
    #[must_use]
    pub fn contains_target(&self, to: Square) -> bool {
        self.moves.iter().any(|m| m.to == to)
    }

    /// Find the move landing on `to`, if any
    #[must_use]
    pub fn find_target(&self, to: Square) -> Option<Move> {
        self.moves.iter().find(|m| m.to == to).copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    inner: std::vec::IntoIter<Move>,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter {
            inner: self.moves.into_iter(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
