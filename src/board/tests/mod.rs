//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move generation and move application
//! - `check.rs` - Check detection
//! - `eval.rs` - Static evaluation terms and caching
//! - `search.rs` - Alpha-beta search
//! - `proptest.rs` - Property-based and randomized tests

mod search;

use super::{Board, Color, ColoredPiece, Piece, Square};

/// Place a piece while building a test position.
pub(crate) fn put(board: &mut Board, rank: usize, file: usize, color: Color, piece: Piece) {
    board.place(Square(rank, file), ColoredPiece::new(color, piece));
}
