//! Check and terminal-state classification.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::session::Session;
use super::types::{Color, Square};
use super::Board;

/// The derived state of a game for the side to move.
///
/// Never stored authoritatively; always recomputed from the board and the
/// side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl Session {
    /// Classify the position for `color_to_move`.
    ///
    /// Checkmate: in check with no legal move anywhere. Stalemate: not in
    /// check with no legal move anywhere. Check: in check otherwise. A
    /// board without that color's king classifies as Playing; a malformed
    /// position is not fatal here.
    #[must_use]
    pub fn classify(&self, board: &Board, color_to_move: Color) -> GameState {
        if board.find_king(color_to_move).is_none() {
            return GameState::Playing;
        }

        let in_check = board.is_king_in_check(color_to_move);
        let has_moves = self.has_any_legal_move(board, color_to_move);

        match (in_check, has_moves) {
            (true, false) => GameState::Checkmate,
            (false, false) => GameState::Stalemate,
            (true, true) => GameState::Check,
            (false, true) => GameState::Playing,
        }
    }

    /// Full-board scan: does `color` have at least one legal move?
    fn has_any_legal_move(&self, board: &Board, color: Color) -> bool {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if !board.holds_color(sq, color) {
                    continue;
                }
                if !self.legal_moves(board, sq).is_empty() {
                    return true;
                }
            }
        }
        false
    }
}
