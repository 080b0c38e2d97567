pub mod board;

pub use board::{
    complete_promotion, promotion_pending, rebuild, Board, BoardBuilder, CastleSide,
    CastlingRights, Color, GameState, Move, MoveKind, MoveList, MoveRecord, Piece, Session, Square,
};
