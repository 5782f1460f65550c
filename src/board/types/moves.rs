//! Move type.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{ColoredPiece, Piece};
use super::square::Square;

/// Classification tag carried by a [`Move`].
///
/// Only `Ordinary` and `DoublePush` are generated today. The remaining
/// variants reserve room for castling, en passant, and promotion so those
/// rules can be added without reshaping the move type; `do_move` currently
/// applies them as plain origin-to-destination placements.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Ordinary,
    DoublePush,
    Promotion(Piece),
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// A move: the piece being moved plus its origin and destination squares.
///
/// A move is identified by its piece and endpoints; `kind` is an
/// annotation derived from them and takes no part in equality or hashing,
/// so a hand-built `Ordinary` move compares equal to the generated,
/// tagged one.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub piece: ColoredPiece,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.piece == other.piece && self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.piece.hash(state);
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(piece: ColoredPiece, from: Square, to: Square) -> Self {
        Move {
            piece,
            from,
            to,
            kind: MoveKind::Ordinary,
        }
    }

    #[inline]
    #[must_use]
    pub const fn double_push(piece: ColoredPiece, from: Square, to: Square) -> Self {
        Move {
            piece,
            from,
            to,
            kind: MoveKind::DoublePush,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.piece.to_char(), self.from, self.to)
    }
}
