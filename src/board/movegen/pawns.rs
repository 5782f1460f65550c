//! Pawn move generation.
//!
//! Single push onto an empty square, double push from the starting rank
//! when both intervening squares are empty, and diagonal captures onto
//! enemy-occupied squares. En passant and promotion are not generated.

use super::super::state::Board;
use super::super::types::Move;

impl Board {
    pub(crate) fn pawn_moves(&self, from: super::super::types::Square) -> Vec<Move> {
        let Some(mover) = self.at(from) else {
            return Vec::new();
        };
        let dir = mover.color.pawn_direction();
        let mut moves = Vec::with_capacity(4);

        // Double push, only from the starting rank through two empty squares
        if from.rank() == mover.color.pawn_start_rank() {
            if let (Some(step), Some(jump)) = (from.offset(dir, 0), from.offset(2 * dir, 0)) {
                if self.at(step).is_none() && self.at(jump).is_none() {
                    moves.push(Move::double_push(mover, from, jump));
                }
            }
        }

        // Single push
        if let Some(step) = from.offset(dir, 0) {
            if self.at(step).is_none() {
                moves.push(Move::new(mover, from, step));
            }
        }

        // Diagonal captures, left and right
        for df in [-1, 1] {
            if let Some(dest) = from.offset(dir, df) {
                if let Some(target) = self.at(dest) {
                    if target.color != mover.color {
                        moves.push(Move::new(mover, from, dest));
                    }
                }
            }
        }

        moves
    }
}
