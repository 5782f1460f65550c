//! Search tuning parameters.

/// Knobs for the alpha-beta search. Defaults are the engine's tuned
/// values; tests and callers with different time budgets can override
/// them.
#[derive(Clone, Debug)]
pub struct SearchParams {
    /// Ply at which recursion stops and the static evaluation is returned
    pub depth_cutoff: u32,
    /// Multiplier on the remaining-depth weight applied to returned scores
    pub depth_bonus: i32,
    /// Magnitude returned (before depth weighting) when the side to move
    /// has no legal reply
    pub mate_score: i32,
    /// Sorted children explored per node at plies up to
    /// `late_move_threshold`
    pub early_breadth: usize,
    /// Sorted children explored per node at deeper plies
    pub late_breadth: usize,
    /// Last ply that still uses `early_breadth`
    pub late_move_threshold: u32,
    /// Plies at or below this depth ignore the breadth limit entirely
    pub full_width_depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth_cutoff: 10,
            depth_bonus: 10,
            mate_score: 20_000,
            early_breadth: 4,
            late_breadth: 2,
            late_move_threshold: 4,
            full_width_depth: 2,
        }
    }
}

impl SearchParams {
    /// Set the depth cutoff
    #[must_use]
    pub fn depth(mut self, depth_cutoff: u32) -> Self {
        self.depth_cutoff = depth_cutoff;
        self
    }

    /// Disable breadth limiting so every sorted child is explored
    #[must_use]
    pub fn full_width(mut self) -> Self {
        self.full_width_depth = self.depth_cutoff;
        self
    }
}
