//! Chess board representation and game logic.
//!
//! Mailbox 8x8 representation with value-semantics positions: every move
//! produces a fresh copy of the parent, so search recursion never threads
//! a shared mutable board.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod check;
mod error;
mod eval;
mod movegen;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::SquareError;
pub use eval::EvalParams;
pub use search::{search, search_with, SearchParams};
pub use state::Board;
pub use types::{CastlingRights, Color, ColoredPiece, Move, MoveKind, Piece, Square};
