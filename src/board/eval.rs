//! Static position evaluation.
//!
//! The score is absolute: positive favors White, negative favors Black,
//! whichever side asks. Three weighted terms:
//!
//! 1. material: signed piece values summed over the board
//! 2. pressure: per-square net attack/defense over both sides'
//!    pseudo-moves; a net-attacked square subtracts its occupant's signed
//!    value, a net-defended square adds it
//! 3. check: one unit per pseudo-move landing on a king, signed by the
//!    attacker

use super::state::Board;
use super::types::{Color, Piece, Square};

/// Evaluation term weights. The defaults are the tuned engine values;
/// callers can zero individual terms to isolate the others.
#[derive(Clone, Debug)]
pub struct EvalParams {
    pub material: i32,
    pub pressure: i32,
    pub check: i32,
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams {
            material: 1000,
            pressure: 25,
            check: 2000,
        }
    }
}

impl Board {
    /// Evaluate with the default weights, reusing the cached score when the
    /// grid has not mutated since it was computed. Only default-weight
    /// scores are ever cached.
    pub fn evaluate(&mut self) -> i32 {
        if let Some(score) = self.cached_eval {
            return score;
        }
        let score = self.compute(&EvalParams::default());
        self.cached_eval = Some(score);
        score
    }

    /// Evaluate with explicit weights. Always recomputes and leaves the
    /// default-weight cache untouched.
    #[must_use]
    pub fn evaluate_with(&self, params: &EvalParams) -> i32 {
        self.compute(params)
    }

    fn compute(&self, params: &EvalParams) -> i32 {
        let mut material = 0;
        for (_, piece) in self.occupied() {
            material += piece.signed_value();
        }

        // Net attack/defense per square: +1 when a move lands on an enemy
        // piece, -1 when it lands on a friendly one (knights only, by
        // construction of the pseudo-move set).
        let mut net = [0i32; 64];
        let mut checks = 0;
        for side in Color::BOTH {
            for m in self.pseudo_moves(side) {
                let Some(target) = self.at(m.to) else {
                    continue;
                };
                let idx = m.to.as_index();
                if target.color != side {
                    net[idx] += 1;
                    if target.piece == Piece::King {
                        checks += side.sign();
                    }
                } else {
                    net[idx] -= 1;
                }
            }
        }

        let mut pressure = 0;
        for (idx, &n) in net.iter().enumerate() {
            if n == 0 {
                continue;
            }
            let Some(target) = self.at(Square::from_index(idx)) else {
                continue;
            };
            if n > 0 {
                pressure -= target.signed_value();
            } else {
                pressure += target.signed_value();
            }
        }

        material * params.material + pressure * params.pressure + checks * params.check
    }

    /// The cached score, if still valid for the current grid.
    #[inline]
    #[must_use]
    pub fn cached_evaluation(&self) -> Option<i32> {
        self.cached_eval
    }
}
