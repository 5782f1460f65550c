//! Core value types: colors, pieces, squares, moves, castling rights.

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveKind};
pub use piece::{Color, ColoredPiece, Piece};
pub use square::Square;
