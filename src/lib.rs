pub mod board;
pub mod engine;

pub use board::{
    search, search_with, Board, CastlingRights, Color, ColoredPiece, EvalParams, Move, MoveKind,
    Piece, SearchParams, Square, SquareError,
};
pub use engine::{EngineState, ParallelSearch, ProgressCallback};
