use super::super::types::{Color, Move, MoveList, Piece, Square};
use super::super::Board;

impl Board {
    /// Raw pawn moves: the single forward push onto an empty square and
    /// the two diagonal captures onto enemy pieces. No double-step and no
    /// en passant; this is the set the attack test consults.
    pub(crate) fn pawn_raw_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(Move::normal(from, forward));
            }
        }

        for dc in [-1, 1] {
            if let Some(to) = from.offset(dir, dc) {
                if self.holds_color(to, color.opponent()) {
                    moves.push(Move::normal(from, to));
                }
            }
        }

        moves
    }

    /// Full pseudo-legal pawn moves: forward push, the double-step from
    /// the starting row over two empty squares, diagonal captures, and
    /// the en-passant capture onto the session's target square.
    pub(crate) fn pawn_moves(
        &self,
        from: Square,
        color: Color,
        en_passant_target: Option<Square>,
    ) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(Move::normal(from, forward));
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::double_step(from, double));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(to) = from.offset(dir, dc) {
                if self.holds_color(to, color.opponent()) {
                    moves.push(Move::normal(from, to));
                }
            }
        }

        // The target is only ever set for the one ply following a
        // double-step. The enemy-pawn check keeps a same-colored pawn
        // that happens to satisfy the geometry from capturing its own.
        if let Some(target) = en_passant_target {
            let reaches_row = from.row() as isize + dir == target.row() as isize;
            let adjacent_col = from.col().abs_diff(target.col()) == 1;
            let enemy_pawn = self.piece_at(target) == Some((color.opponent(), Piece::Pawn));
            if reaches_row && adjacent_col && enemy_pawn {
                moves.push(Move::en_passant(from, target));
            }
        }

        moves
    }
}
