//! Mailbox board representation.
//!
//! A [`Board`] is a pure value: an 8x8 grid of optional pieces plus the
//! castling-rights bitmask. Copying a board duplicates the whole grid, so
//! search can hand every recursive call its own position with no shared
//! mutable storage. The grid is small enough that bulk copies stay cheap.

use std::fmt;

use super::types::{CastlingRights, Color, ColoredPiece, Move, Piece, Square};

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: [[Option<ColoredPiece>; 8]; 8], // [rank][file]
    pub(crate) castling: CastlingRights,
    // Lazily cached evaluator score; valid until the grid next mutates.
    pub(crate) cached_eval: Option<i32>,
}

impl Board {
    /// Standard starting position with full castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for color in Color::BOTH {
            for (file, &piece) in back_rank.iter().enumerate() {
                board.place(Square(color.back_rank(), file), ColoredPiece::new(color, piece));
                board.place(
                    Square(color.pawn_start_rank(), file),
                    ColoredPiece::new(color, Piece::Pawn),
                );
            }
        }
        board.castling = CastlingRights::all();
        board
    }

    /// Empty board with no castling rights. Used by tests and by callers
    /// assembling custom positions.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            castling: CastlingRights::none(),
            cached_eval: None,
        }
    }

    /// The occupant of a square, if any.
    #[inline]
    #[must_use]
    pub fn at(&self, sq: Square) -> Option<ColoredPiece> {
        self.grid[sq.rank()][sq.file()]
    }

    /// Put a piece on a square, replacing any occupant.
    pub fn place(&mut self, sq: Square, piece: ColoredPiece) {
        self.grid[sq.rank()][sq.file()] = Some(piece);
        self.cached_eval = None;
    }

    /// Remove whatever occupies a square.
    pub fn clear_square(&mut self, sq: Square) {
        self.grid[sq.rank()][sq.file()] = None;
        self.cached_eval = None;
    }

    /// Current castling rights.
    #[inline]
    #[must_use]
    pub const fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Pseudo-legality: the origin is occupied and the destination does not
    /// hold a same-side piece. Used by the sliding and pawn generators to
    /// decide whether a ray continues; it does NOT check for self-check.
    #[must_use]
    pub fn is_pseudo_legal(&self, m: Move) -> bool {
        let Some(mover) = self.at(m.from) else {
            return false;
        };
        match self.at(m.to) {
            Some(target) => target.color != mover.color,
            None => true,
        }
    }

    /// Apply a move in place if it is pseudo-legal; returns false (no-op)
    /// otherwise. Callers needing full legality must pre-check with
    /// [`Board::is_legal`](crate::board::Board::is_legal).
    ///
    /// Castling-rights bits are cleared when a king moves or a rook leaves
    /// its corner; they are never set back.
    pub fn do_move(&mut self, m: Move) -> bool {
        let Some(mover) = self.at(m.from) else {
            return false;
        };
        if let Some(target) = self.at(m.to) {
            if target.color == mover.color {
                return false;
            }
        }

        match mover.piece {
            Piece::King => self.castling.remove_side(mover.color),
            Piece::Rook => match (m.from.rank(), m.from.file()) {
                (0, 0) => self.castling.remove(Color::White, false),
                (0, 7) => self.castling.remove(Color::White, true),
                (7, 0) => self.castling.remove(Color::Black, false),
                (7, 7) => self.castling.remove(Color::Black, true),
                _ => {}
            },
            _ => {}
        }

        self.grid[m.to.rank()][m.to.file()] = Some(mover);
        self.grid[m.from.rank()][m.from.file()] = None;
        self.cached_eval = None;
        true
    }

    /// Validate and apply a proposed human move given only its endpoints.
    ///
    /// The move is accepted only if it matches a fully legal move for the
    /// origin piece's side; a rejected proposal leaves the position
    /// untouched so the caller can snap the piece back.
    pub fn propose_move(&mut self, from: Square, to: Square) -> bool {
        let Some(mover) = self.at(from) else {
            return false;
        };
        let candidate = self
            .legal_moves(mover.color)
            .into_iter()
            .find(|m| m.from == from && m.to == to);
        match candidate {
            Some(m) => self.do_move(m),
            None => false,
        }
    }

    /// Locate a side's king. `None` means the king was captured, which the
    /// check oracle treats as a decided position.
    #[must_use]
    pub(crate) fn king_square(&self, side: Color) -> Option<Square> {
        let king = ColoredPiece::new(side, Piece::King);
        for rank in 0..8 {
            for file in 0..8 {
                if self.grid[rank][file] == Some(king) {
                    return Some(Square(rank, file));
                }
            }
        }
        None
    }

    /// Iterate over all occupied squares.
    pub(crate) fn occupied(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        (0..64).filter_map(move |idx| {
            let sq = Square::from_index(idx);
            self.at(sq).map(|piece| (sq, piece))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

// Equality is over occupancy only: castling rights and the cached score are
// bookkeeping, not identity.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.grid[rank][file] {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
