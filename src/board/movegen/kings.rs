use super::super::types::{Color, Move, MoveList, Piece, Square};
use super::super::Board;
use super::ALL_DIRS;

impl Board {
    /// Single-step king moves in the eight unit directions.
    ///
    /// Castling candidates are emitted by the session-aware generator,
    /// not here; the attack test must not recurse into castling.
    pub(crate) fn king_step_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();

        for &(dr, dc) in &ALL_DIRS {
            if let Some(to) = from.offset(dr, dc) {
                if !self.holds_color(to, color) {
                    moves.push(Move::normal(from, to));
                }
            }
        }

        moves
    }

    /// Locate the king of `color`, scanning the 64 squares.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// Returns true if any piece of `attacker_color` has `square` in its
    /// raw move set.
    ///
    /// Raw moves exclude castling, en passant, and the double-step, so
    /// self-pins are irrelevant here and the test cannot recurse.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        if !square.on_board() {
            return false;
        }
        for row in 0..8 {
            for col in 0..8 {
                let from = Square(row, col);
                if !self.holds_color(from, attacker_color) {
                    continue;
                }
                if self.raw_moves(from).contains_target(square) {
                    return true;
                }
            }
        }
        false
    }

    /// Returns true if `color`'s king is attacked.
    ///
    /// A board with no king of that color reports false; a malformed
    /// position is not fatal here.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        if let Some(king_sq) = self.find_king(color) {
            self.is_square_attacked(king_sq, color.opponent())
        } else {
            false
        }
    }
}
