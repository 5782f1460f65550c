//! Depth-limited minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes the absolute evaluation score. At
//! each node the children are statically scored and sorted so the likely
//! principal variation is explored first, then only the first few sorted
//! children are recursed into at deeper plies (breadth limiting). The
//! returned value is therefore an approximation of the true minimax value
//! past `full_width_depth`; that trade is deliberate and controlled by
//! [`SearchParams`].

mod params;

pub use params::SearchParams;

use super::state::Board;
use super::types::Color;

/// Search `board` for `side` to move with the default parameters.
#[must_use]
pub fn search(board: &Board, side: Color) -> i32 {
    search_with(board, side, &SearchParams::default())
}

/// Search `board` for `side` to move with explicit parameters.
#[must_use]
pub fn search_with(board: &Board, side: Color, params: &SearchParams) -> i32 {
    let mut root = board.clone();
    alpha_beta(&mut root, 1, side, i32::MIN, i32::MAX, params)
}

fn alpha_beta(
    board: &mut Board,
    depth: u32,
    side: Color,
    mut alpha: i32,
    mut beta: i32,
    params: &SearchParams,
) -> i32 {
    // Earlier plies get a larger weight, so nearer mates and gains
    // dominate distant ones.
    let depth_weight = (params.depth_cutoff as i32 - depth as i32 + 1) * params.depth_bonus;

    let mut children = board.legal_children(side);
    if children.is_empty() {
        // No legal reply: a terminal scored for the opponent, not an error
        return match side {
            Color::White => -params.mate_score * depth_weight,
            Color::Black => params.mate_score * depth_weight,
        };
    }
    if depth >= params.depth_cutoff {
        return board.evaluate() * depth_weight;
    }

    let breadth = if depth > params.late_move_threshold {
        params.late_breadth
    } else {
        params.early_breadth
    };
    let explored = if depth > params.full_width_depth && breadth < children.len() {
        breadth
    } else {
        children.len()
    };

    for child in &mut children {
        child.evaluate();
    }
    match side {
        Color::White => children.sort_by(|a, b| b.cached_eval.cmp(&a.cached_eval)),
        Color::Black => children.sort_by(|a, b| a.cached_eval.cmp(&b.cached_eval)),
    }

    let mut strongest = match side {
        Color::White => i32::MIN,
        Color::Black => i32::MAX,
    };
    for child in children.iter_mut().take(explored) {
        let child_score = alpha_beta(child, depth + 1, side.opponent(), alpha, beta, params);
        match side {
            Color::White => {
                strongest = strongest.max(child_score);
                alpha = alpha.max(child_score);
            }
            Color::Black => {
                strongest = strongest.min(child_score);
                beta = beta.min(child_score);
            }
        }
        if alpha > beta {
            break;
        }
    }
    strongest
}
