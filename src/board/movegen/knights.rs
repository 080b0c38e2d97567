use super::super::types::{Color, Move, MoveList, Square};
use super::super::Board;

pub(crate) const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    /// Fixed-offset knight jumps: on-board and not blocked by an own piece.
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();

        for &(dr, dc) in &KNIGHT_JUMPS {
            if let Some(to) = from.offset(dr, dc) {
                if !self.holds_color(to, color) {
                    moves.push(Move::normal(from, to));
                }
            }
        }

        moves
    }
}
