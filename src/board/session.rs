//! The caller-owned session: castling rights, the en-passant target, and
//! the move history, plus the move executor and promotion completion.

use super::replay::rebuild;
use super::types::{CastleSide, CastlingRights, Color, Move, MoveRecord, Piece, Square};
use super::{Board, PROMOTION_PIECES};

/// Mutable per-game state, owned by the caller and passed into every
/// operation that needs it.
///
/// A session belongs to exactly one logical game. Boards are value-like
/// and flow in and out of each call; only [`Session::execute`] and
/// [`Session::undo`] mutate the session itself. Sharing one session
/// across concurrent games requires external synchronization by contract.
#[derive(Clone, Debug, Default)]
pub struct Session {
    castling_rights: CastlingRights,
    /// Rights floor set by the caller via [`Session::revoke_castling`];
    /// recomputation after undo starts from here, not from full rights.
    base_rights: CastlingRights,
    en_passant_target: Option<Square>,
    history: Vec<MoveRecord>,
}

impl Session {
    /// Create a fresh session: full castling rights, no en-passant
    /// target, empty history.
    #[must_use]
    pub fn new() -> Self {
        Session {
            castling_rights: CastlingRights::all(),
            base_rights: CastlingRights::all(),
            en_passant_target: None,
            history: Vec::new(),
        }
    }

    /// The castling rights still held
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The current en-passant target square, if the previous move was a
    /// pawn double-step
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// The executed moves, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Pieces captured so far, in capture order, scanned from the history
    pub fn captured_pieces(&self) -> impl Iterator<Item = (Color, Piece)> + '_ {
        self.history.iter().filter_map(|record| record.captured)
    }

    /// Give up a castling right without moving (for position setup).
    /// Rights only ever decrease; there is no way to re-grant one.
    pub fn revoke_castling(&mut self, color: Color, side: CastleSide) {
        self.base_rights.remove(color, side);
        self.castling_rights.remove(color, side);
    }

    /// Execute a move, producing the resulting board and mutating the
    /// session's rights, en-passant target, and history.
    ///
    /// The move must come from [`Session::legal_moves`] for this exact
    /// board; executing a fabricated or stale move is undefined by
    /// contract. An empty source square degrades to an unchanged copy
    /// with no history entry.
    #[must_use]
    pub fn execute(&mut self, board: &Board, mv: Move) -> Board {
        let piece = match board.piece_at(mv.from) {
            Some(p) => p,
            None => {
                #[cfg(feature = "logging")]
                log::warn!("execute: no piece on {}, move {} ignored", mv.from, mv);
                return board.clone();
            }
        };
        let captured = board.piece_at(mv.to);

        let next = board.apply_move(mv);

        self.en_passant_target = if mv.is_double_step() {
            Some(mv.to)
        } else {
            None
        };

        self.update_castling_rights(piece, mv.from);

        self.history.push(MoveRecord {
            from: mv.from,
            to: mv.to,
            piece,
            captured,
            kind: mv.kind,
        });

        #[cfg(feature = "logging")]
        log::trace!("executed {} ({:?}), history depth {}", mv, piece, self.history.len());

        next
    }

    /// Discard the last executed move and rebuild the position from the
    /// remaining history.
    ///
    /// Castling rights and the en-passant target are recomputed from the
    /// surviving records, so undo is a left inverse of execute. With an
    /// empty history the board and session are returned unchanged.
    #[must_use]
    pub fn undo(&mut self, board: &Board) -> Board {
        if self.history.pop().is_none() {
            return board.clone();
        }

        self.recompute_from_history();

        #[cfg(feature = "logging")]
        log::trace!("undo, history depth {}", self.history.len());

        rebuild(&self.history)
    }

    /// Clear a mover's castling rights: any king move drops both, a rook
    /// move off its original corner drops that corner's side.
    fn update_castling_rights(&mut self, piece: (Color, Piece), from: Square) {
        let (color, kind) = piece;
        match kind {
            Piece::King => self.castling_rights.remove_both(color),
            Piece::Rook => {
                for side in CastleSide::BOTH {
                    if from == Square(color.back_rank(), side.rook_from_col()) {
                        self.castling_rights.remove(color, side);
                    }
                }
            }
            _ => {}
        }
    }

    /// Refold rights and the en-passant target from the history, applying
    /// the same update rules execute uses. Starts from the caller's
    /// revocation floor so a manually revoked right stays gone.
    fn recompute_from_history(&mut self) {
        self.castling_rights = self.base_rights;
        self.en_passant_target = None;
        for i in 0..self.history.len() {
            let record = self.history[i];
            self.en_passant_target = if record.as_move().is_double_step() {
                Some(record.to)
            } else {
                None
            };
            self.update_castling_rights(record.piece, record.from);
        }
    }
}

/// Locate a pawn standing on its farthest rank, awaiting promotion.
///
/// The executor leaves the pawn in place; the caller detects the pending
/// promotion after `execute` and completes it with a chosen piece kind.
#[must_use]
pub fn promotion_pending(board: &Board) -> Option<Square> {
    for color in Color::BOTH {
        let row = color.pawn_promotion_row();
        for col in 0..8 {
            let sq = Square(row, col);
            if board.piece_at(sq) == Some((color, Piece::Pawn)) {
                return Some(sq);
            }
        }
    }
    None
}

/// Write the chosen piece kind over a promoting pawn, producing the new
/// board.
///
/// Only Queen, Rook, Bishop, or Knight are accepted, and only for a pawn
/// on its farthest rank; anything else degrades to an unchanged copy.
#[must_use]
pub fn complete_promotion(board: &Board, square: Square, kind: Piece) -> Board {
    let (color, piece) = match board.piece_at(square) {
        Some(p) => p,
        None => return board.clone(),
    };
    if piece != Piece::Pawn
        || square.row() != color.pawn_promotion_row()
        || !PROMOTION_PIECES.contains(&kind)
    {
        return board.clone();
    }

    let mut next = board.clone();
    next.set_piece(square, color, kind);

    #[cfg(feature = "logging")]
    log::debug!("promotion on {} to {:?}", square, kind);

    next
}
