//! Alpha-beta search tests.

use super::put;
use crate::board::search::{search, search_with, SearchParams};
use crate::board::{Board, Color, Piece};

/// Unpruned, unsorted, unlimited-breadth minimax with the same terminal
/// and leaf rules as the production search.
fn plain_minimax(board: &mut Board, depth: u32, side: Color, params: &SearchParams) -> i32 {
    let depth_weight = (params.depth_cutoff as i32 - depth as i32 + 1) * params.depth_bonus;
    let mut children = board.legal_children(side);
    if children.is_empty() {
        return match side {
            Color::White => -params.mate_score * depth_weight,
            Color::Black => params.mate_score * depth_weight,
        };
    }
    if depth >= params.depth_cutoff {
        return board.evaluate() * depth_weight;
    }
    let scores = children
        .iter_mut()
        .map(|child| plain_minimax(child, depth + 1, side.opponent(), params));
    match side {
        Color::White => scores.max().unwrap(),
        Color::Black => scores.min().unwrap(),
    }
}

fn mated_black() -> Board {
    let mut board = Board::empty();
    put(&mut board, 7, 0, Color::Black, Piece::King);
    put(&mut board, 6, 1, Color::White, Piece::Queen);
    put(&mut board, 5, 1, Color::White, Piece::King);
    board
}

#[test]
fn mated_side_scores_for_the_opponent() {
    let board = mated_black();
    assert!(board.in_check(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());
    // Terminal at ply one: mate score times the full depth weight.
    assert_eq!(
        search_with(&board, Color::Black, &SearchParams::default()),
        2_000_000
    );

    let mut board = Board::empty();
    put(&mut board, 0, 7, Color::White, Piece::King);
    put(&mut board, 1, 6, Color::Black, Piece::Queen);
    put(&mut board, 2, 6, Color::Black, Piece::King);
    assert!(board.in_check(Color::White));
    assert!(board.legal_moves(Color::White).is_empty());
    assert_eq!(
        search_with(&board, Color::White, &SearchParams::default()),
        -2_000_000
    );
}

#[test]
fn stalemate_scores_like_mate() {
    let mut board = Board::empty();
    put(&mut board, 7, 0, Color::Black, Piece::King);
    put(&mut board, 5, 1, Color::White, Piece::Queen);
    put(&mut board, 0, 7, Color::White, Piece::King);
    assert!(!board.in_check(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());
    // Any empty legal set is terminal; stalemate is not distinguished.
    assert_eq!(
        search_with(&board, Color::Black, &SearchParams::default()),
        2_000_000
    );
}

#[test]
fn depth_cutoff_returns_the_weighted_static_score() {
    let mut board = Board::empty();
    put(&mut board, 0, 0, Color::White, Piece::King);
    put(&mut board, 7, 7, Color::Black, Piece::King);
    put(&mut board, 3, 3, Color::White, Piece::Pawn);
    put(&mut board, 5, 4, Color::Black, Piece::Knight);
    let expected = board.evaluate() * 10;
    let params = SearchParams::default().depth(1);
    assert_eq!(search_with(&board, Color::White, &params), expected);
}

#[test]
fn full_width_search_matches_plain_minimax() {
    let params = SearchParams::default().depth(3).full_width();

    let start = Board::new();
    assert_eq!(
        search_with(&start, Color::White, &params),
        plain_minimax(&mut start.clone(), 1, Color::White, &params)
    );

    let mut sparse = Board::empty();
    put(&mut sparse, 0, 4, Color::White, Piece::King);
    put(&mut sparse, 1, 3, Color::White, Piece::Pawn);
    put(&mut sparse, 7, 4, Color::Black, Piece::King);
    put(&mut sparse, 5, 5, Color::Black, Piece::Knight);
    put(&mut sparse, 6, 3, Color::Black, Piece::Pawn);
    for side in Color::BOTH {
        assert_eq!(
            search_with(&sparse, side, &params),
            plain_minimax(&mut sparse.clone(), 1, side, &params)
        );
    }
}

#[test]
fn finds_mate_in_one() {
    let mut board = Board::empty();
    put(&mut board, 7, 0, Color::Black, Piece::King);
    put(&mut board, 5, 1, Color::White, Piece::King);
    put(&mut board, 6, 7, Color::White, Piece::Queen);
    assert!(!board.in_check(Color::Black));
    assert!(!board.legal_moves(Color::Black).is_empty());

    // Qh7-b7 mates, so the best line terminates at ply two.
    let params = SearchParams::default().depth(3).full_width();
    assert_eq!(search_with(&board, Color::White, &params), 400_000);
}

#[test]
fn default_search_stays_below_mate_on_a_bare_kings_board() {
    let mut board = Board::empty();
    put(&mut board, 0, 0, Color::White, Piece::King);
    put(&mut board, 7, 7, Color::Black, Piece::King);
    let score = search(&board, Color::White);
    assert!(score.abs() < 20_000);
}

#[test]
fn full_width_builder_lifts_the_breadth_limit() {
    let params = SearchParams::default().depth(4).full_width();
    assert_eq!(params.depth_cutoff, 4);
    assert_eq!(params.full_width_depth, 4);

    let defaults = SearchParams::default();
    assert_eq!(defaults.depth_cutoff, 10);
    assert_eq!(defaults.early_breadth, 4);
    assert_eq!(defaults.late_breadth, 2);
}
