//! Move generation.
//!
//! `pseudo_moves` enumerates piece-shape moves without self-check
//! filtering; the `legal_*` twins apply each candidate and keep only the
//! results that do not leave the mover's own king in check. Checkmate and
//! stalemate both surface as an empty legal set.

mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::{CARDINALS, DIAGONALS};

use super::state::Board;
use super::types::{Color, Move, Piece};

/// Reserve hint: roughly twice a typical middlegame branching factor
const BRANCHING_HINT: usize = 70;

impl Board {
    /// All pseudo-legal moves for `side`.
    ///
    /// Knight moves landing on friendly pieces are included (the evaluator
    /// tallies them as defense); slider rays stop short of friendly
    /// pieces, so sliders never produce such moves.
    #[must_use]
    pub fn pseudo_moves(&self, side: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(BRANCHING_HINT);
        for (sq, piece) in self.occupied() {
            if piece.color != side {
                continue;
            }
            match piece.piece {
                Piece::Pawn => moves.extend(self.pawn_moves(sq)),
                Piece::Knight => moves.extend(self.knight_moves(sq)),
                Piece::Bishop => moves.extend(self.ray_moves(sq, &DIAGONALS, true)),
                Piece::Rook => moves.extend(self.ray_moves(sq, &CARDINALS, true)),
                Piece::Queen => {
                    moves.extend(self.ray_moves(sq, &DIAGONALS, true));
                    moves.extend(self.ray_moves(sq, &CARDINALS, true));
                }
                Piece::King => {
                    moves.extend(self.ray_moves(sq, &DIAGONALS, false));
                    moves.extend(self.ray_moves(sq, &CARDINALS, false));
                }
            }
        }
        moves
    }

    /// Every legal move for `side`: pseudo-legal and not leaving `side`'s
    /// own king in check.
    #[must_use]
    pub fn legal_moves(&self, side: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(BRANCHING_HINT);
        for m in self.pseudo_moves(side) {
            if !self.is_pseudo_legal(m) {
                continue;
            }
            let mut child = self.clone();
            child.do_move(m);
            if !child.in_check(side) {
                moves.push(m);
            }
        }
        moves
    }

    /// The positions reached by every legal move for `side`. Each child is
    /// an independently owned copy of this position with one move applied.
    #[must_use]
    pub fn legal_children(&self, side: Color) -> Vec<Board> {
        let mut children = Vec::with_capacity(BRANCHING_HINT);
        for m in self.pseudo_moves(side) {
            if !self.is_pseudo_legal(m) {
                continue;
            }
            let mut child = self.clone();
            child.do_move(m);
            if !child.in_check(side) {
                children.push(child);
            }
        }
        children
    }

    /// Full legality: `m` is a member of the legal-move set for its side.
    #[must_use]
    pub fn is_legal(&self, m: Move) -> bool {
        self.legal_moves(m.piece.color).contains(&m)
    }
}
