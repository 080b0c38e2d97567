use super::super::types::{Color, Move, MoveList, Square};
use super::super::Board;

impl Board {
    /// Walk each ray one step at a time from `from`.
    ///
    /// A ray ends off the board, on the first own piece (excluded), or on
    /// the first enemy piece (included as a capture).
    pub(crate) fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        dirs: &[(isize, isize)],
    ) -> MoveList {
        let mut moves = MoveList::new();

        for &(dr, dc) in dirs {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.piece_at(to) {
                    Some((c, _)) if c == color => break,
                    Some(_) => {
                        moves.push(Move::normal(from, to));
                        break;
                    }
                    None => {
                        moves.push(Move::normal(from, to));
                        current = to;
                    }
                }
            }
        }

        moves
    }
}
