//! Move generation: per-kind pseudo-legal rules and the legality filter.
//!
//! Raw moves (plain movement patterns, no castling/en-passant/double-step)
//! need only the board and drive the attack test. Full pseudo-legal
//! generation additionally consults the session for the en-passant target
//! and castling rights. Legal moves are the pseudo-legal set minus every
//! candidate whose resulting board leaves the mover's own king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::session::Session;
use super::types::{CastleSide, Color, Move, MoveList, Piece, Square};
use super::Board;

pub(crate) const ORTHOGONAL_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ALL_DIRS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Raw movement-pattern moves for the piece on `from`.
    ///
    /// Excludes castling, en passant, and the pawn double-step; this is
    /// the move set the attack test is defined over. Empty or off-board
    /// squares yield an empty list.
    pub(crate) fn raw_moves(&self, from: Square) -> MoveList {
        let (color, piece) = match self.piece_at(from) {
            Some(p) => p,
            None => return MoveList::new(),
        };

        match piece {
            Piece::Pawn => self.pawn_raw_moves(from, color),
            Piece::Knight => self.knight_moves(from, color),
            Piece::Bishop => self.sliding_moves(from, color, &DIAGONAL_DIRS),
            Piece::Rook => self.sliding_moves(from, color, &ORTHOGONAL_DIRS),
            Piece::Queen => self.sliding_moves(from, color, &ALL_DIRS),
            Piece::King => self.king_step_moves(from, color),
        }
    }
}

impl Session {
    /// Pseudo-legal candidate moves for the piece on `from`.
    ///
    /// Obeys movement patterns and occupancy but not the self-check rule.
    /// Empty or off-board squares yield an empty list rather than an
    /// error.
    #[must_use]
    pub fn pseudo_legal_moves(&self, board: &Board, from: Square) -> MoveList {
        let (color, piece) = match board.piece_at(from) {
            Some(p) => p,
            None => return MoveList::new(),
        };

        match piece {
            Piece::Pawn => board.pawn_moves(from, color, self.en_passant_target()),
            Piece::King => {
                let mut moves = board.king_step_moves(from, color);
                // Castling candidates only from the king's home square
                if from == Square(color.back_rank(), 4) {
                    for side in CastleSide::BOTH {
                        if self.can_castle(board, color, side) {
                            let to = Square(color.back_rank(), side.king_to_col());
                            moves.push(Move::castle(from, to, side));
                        }
                    }
                }
                moves
            }
            _ => board.raw_moves(from),
        }
    }

    /// Legal moves for the piece on `from`.
    ///
    /// Every pseudo-legal candidate is simulated on a copy of the board
    /// and rejected if the mover's own king is attacked on the resulting
    /// position. This filter is the single source of truth for legality:
    /// check, checkmate, and stalemate are all defined in terms of it.
    #[must_use]
    pub fn legal_moves(&self, board: &Board, from: Square) -> MoveList {
        let color = match board.piece_at(from) {
            Some((c, _)) => c,
            None => return MoveList::new(),
        };

        let mut legal = MoveList::new();
        for mv in &self.pseudo_legal_moves(board, from) {
            let next = board.apply_move(*mv);
            if !next.is_king_in_check(color) {
                legal.push(*mv);
            }
        }
        legal
    }

    /// Returns true if `color` may castle to `side` on this board.
    ///
    /// Requires the right to still be held, the king not currently in
    /// check, the rook standing on its corner, the squares between king
    /// and rook empty, and every square the king traverses (start and end
    /// inclusive) unattacked on the current board.
    fn can_castle(&self, board: &Board, color: Color, side: CastleSide) -> bool {
        if !self.castling_rights().has(color, side) {
            return false;
        }
        if board.is_king_in_check(color) {
            return false;
        }

        let row = color.back_rank();
        let corner = Square(row, side.rook_from_col());
        if board.piece_at(corner) != Some((color, Piece::Rook)) {
            return false;
        }

        let between: &[usize] = match side {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        };
        if between.iter().any(|&col| !board.is_empty(Square(row, col))) {
            return false;
        }

        let king_path: &[usize] = match side {
            CastleSide::Kingside => &[4, 5, 6],
            CastleSide::Queenside => &[4, 3, 2],
        };
        !king_path
            .iter()
            .any(|&col| board.is_square_attacked(Square(row, col), color.opponent()))
    }
}
