//! Knight move generation.

use once_cell::sync::Lazy;

use super::super::state::Board;
use super::super::types::{Move, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// In-bounds knight destinations for every square, built once on first use.
static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
});

impl Board {
    /// Knight pseudo-moves: the fixed offsets filtered to board bounds only.
    ///
    /// A destination holding a friendly piece is kept at this level; the
    /// evaluator reads such moves as defense and the legality filter drops
    /// them before they can be played.
    pub(crate) fn knight_moves(&self, from: Square) -> Vec<Move> {
        let Some(mover) = self.at(from) else {
            return Vec::new();
        };
        KNIGHT_TARGETS[from.as_index()]
            .iter()
            .map(|&to| Move::new(mover, from, to))
            .collect()
    }

    /// In-bounds knight target squares from `from`.
    pub(crate) fn knight_targets(from: Square) -> &'static [Square] {
        &KNIGHT_TARGETS[from.as_index()]
    }
}
