//! Check detection.

use super::movegen::{CARDINALS, DIAGONALS};
use super::state::Board;
use super::types::{Color, ColoredPiece, Piece};

impl Board {
    /// Whether `side`'s king is attacked.
    ///
    /// Works outward from the king square: sliding rays for enemy
    /// queens/bishops (diagonal) and queens/rooks (cardinal), the knight
    /// offsets, the eight adjacent squares for the enemy king, and the two
    /// pawn-capture squares. A missing king counts as check: the game is
    /// already decided.
    ///
    /// This is the single source of truth for legality filtering and
    /// terminal detection.
    #[must_use]
    pub fn in_check(&self, side: Color) -> bool {
        let Some(king_sq) = self.king_square(side) else {
            return true;
        };
        let enemy = side.opponent();

        for m in self.ray_moves(king_sq, &DIAGONALS, true) {
            if let Some(p) = self.at(m.to) {
                if p.color == enemy && matches!(p.piece, Piece::Queen | Piece::Bishop) {
                    return true;
                }
            }
        }

        for m in self.ray_moves(king_sq, &CARDINALS, true) {
            if let Some(p) = self.at(m.to) {
                if p.color == enemy && matches!(p.piece, Piece::Queen | Piece::Rook) {
                    return true;
                }
            }
        }

        let enemy_knight = ColoredPiece::new(enemy, Piece::Knight);
        for &sq in Board::knight_targets(king_sq) {
            if self.at(sq) == Some(enemy_knight) {
                return true;
            }
        }

        let enemy_king = ColoredPiece::new(enemy, Piece::King);
        for &(dr, df) in CARDINALS.iter().chain(DIAGONALS.iter()) {
            if let Some(sq) = king_sq.offset(dr, df) {
                if self.at(sq) == Some(enemy_king) {
                    return true;
                }
            }
        }

        // Enemy pawns capture toward us, so they sit one step along our own
        // pawn direction.
        let enemy_pawn = ColoredPiece::new(enemy, Piece::Pawn);
        let dir = side.pawn_direction();
        for df in [-1, 1] {
            if let Some(sq) = king_sq.offset(dir, df) {
                if self.at(sq) == Some(enemy_pawn) {
                    return true;
                }
            }
        }

        false
    }
}
