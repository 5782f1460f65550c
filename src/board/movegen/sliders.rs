//! Sliding-ray move generation.
//!
//! One ray walker covers rooks, bishops, and queens (`extending = true`)
//! and, truncated to a single step, the king (`extending = false`). A ray
//! stops on the first occupied square: inclusive when the occupant is an
//! enemy piece (a capture), exclusive when it is friendly.

use super::super::state::Board;
use super::super::types::{Move, Square};

/// The four cardinal ray directions as (rank, file) deltas
pub(crate) const CARDINALS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// The four diagonal ray directions as (rank, file) deltas
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

impl Board {
    /// Walk each of four directions outward from `from`, collecting
    /// pseudo-legal moves. An empty origin yields no moves.
    pub(crate) fn ray_moves(
        &self,
        from: Square,
        directions: &[(isize, isize); 4],
        extending: bool,
    ) -> Vec<Move> {
        let Some(mover) = self.at(from) else {
            return Vec::new();
        };
        let mut moves = Vec::with_capacity(16);
        for &(dr, df) in directions {
            for step in 1..8 {
                let Some(dest) = from.offset(dr * step, df * step) else {
                    break;
                };
                let candidate = Move::new(mover, from, dest);
                if !self.is_pseudo_legal(candidate) {
                    break;
                }
                moves.push(candidate);
                if !extending || self.at(dest).is_some() {
                    break;
                }
            }
        }
        moves
    }
}
