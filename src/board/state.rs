//! The board grid and its relocation mechanics.

use std::fmt;

use super::types::{Color, Move, Piece, Square};

/// An 8x8 board: a flat 64-slot mapping from square to optional piece.
///
/// Value-like: every mutation path produces a structural copy, the board
/// passed in is never modified in place. The grid performs no validation
/// of its own; out-of-range squares read as empty and writes to them are
/// dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<(Color, Piece)>; 64],
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Create a board in the canonical starting position.
    ///
    /// Black's pieces occupy rows 0-1, White's rows 6-7, kings on column 4.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, col), Color::Black, *piece);
            board.set_piece(Square(1, col), Color::Black, Piece::Pawn);
            board.set_piece(Square(6, col), Color::White, Piece::Pawn);
            board.set_piece(Square(7, col), Color::White, *piece);
        }
        board
    }

    /// Read the piece at a square, `None` for an empty or off-board square
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        if square.on_board() {
            self.squares[square.as_index()]
        } else {
            None
        }
    }

    /// Place a piece on a square, replacing whatever was there
    #[inline]
    pub fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        if square.on_board() {
            self.squares[square.as_index()] = Some((color, piece));
        }
    }

    /// Remove the piece from a square, if any
    #[inline]
    pub fn clear_square(&mut self, square: Square) {
        if square.on_board() {
            self.squares[square.as_index()] = None;
        }
    }

    /// Returns true if the square holds no piece (off-board reads as empty)
    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Returns true if the square holds a piece of `color`
    #[inline]
    #[must_use]
    pub(crate) fn holds_color(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some((c, _)) if c == color)
    }

    /// Apply a move's relocation side-effects, producing a new board.
    ///
    /// Moves the piece from source to destination, relocates the rook for
    /// castling, and clears the en-passant captured square (the mover's
    /// source row, the destination's column). Capture bookkeeping is the
    /// caller's concern; the destination overwrite removes a captured
    /// piece by itself. An empty source yields an unchanged copy.
    #[must_use]
    pub(crate) fn apply_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        let (color, piece) = match next.piece_at(mv.from) {
            Some(p) => p,
            None => return next,
        };

        if let Some(side) = mv.castle_side() {
            let row = mv.from.row();
            let rook_from = Square(row, side.rook_from_col());
            let rook_to = Square(row, side.rook_to_col());
            if let Some((rook_color, rook)) = next.piece_at(rook_from) {
                next.set_piece(rook_to, rook_color, rook);
                next.clear_square(rook_from);
            }
        }

        if mv.is_en_passant() {
            next.clear_square(Square(mv.from.row(), mv.to.col()));
        }

        next.clear_square(mv.from);
        next.set_piece(mv.to, color, piece);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => piece.to_char_colored(color),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        fmt::Display::fmt(self, f)
    }
}
