//! Integration tests for the parallel engine-turn coordinator.

use std::sync::Arc;

use parking_lot::Mutex;

use chess_core::{
    search_with, Board, Color, ColoredPiece, EngineState, ParallelSearch, Piece, SearchParams,
    Square,
};

fn shallow() -> SearchParams {
    SearchParams::default().depth(2)
}

fn sq(rank: usize, file: usize) -> Square {
    Square::new(rank, file).unwrap()
}

#[test]
fn collects_one_score_per_candidate_in_dispatch_order() {
    let board = Board::new();
    let params = shallow();
    let mut engine = ParallelSearch::with_params(&board, Color::White, params.clone());
    engine.start();
    let best = engine.wait();

    assert_eq!(engine.state(), EngineState::Complete);
    assert_eq!(engine.candidates().len(), 20);
    assert_eq!(engine.scores().len(), 20);
    assert!(best.is_some());

    for (child, &score) in engine.candidates().iter().zip(engine.scores()) {
        assert_eq!(score, search_with(child, Color::Black, &params));
    }
}

#[test]
fn best_is_unavailable_before_completion() {
    let board = Board::new();
    let mut engine = ParallelSearch::with_params(&board, Color::White, shallow());
    assert_eq!(engine.state(), EngineState::Idle);
    assert!(engine.best().is_none());
    assert!(engine.wait().is_none());

    engine.start();
    assert_eq!(engine.state(), EngineState::Polling);
    assert!(engine.best().is_none());
    assert!(engine.scores().is_empty());

    assert!(engine.wait().is_some());
}

#[test]
fn best_is_the_first_minimum_score() {
    let board = Board::new();
    let mut engine = ParallelSearch::with_params(&board, Color::White, shallow());
    engine.start();
    let best = engine.wait().unwrap();

    let scores = engine.scores();
    let min = scores.iter().copied().min().unwrap();
    let first_min = scores.iter().position(|&s| s == min).unwrap();
    assert_eq!(best, engine.candidates()[first_min]);
}

#[test]
fn progress_reports_are_monotonic_and_end_at_one() {
    let board = Board::new();
    let mut engine = ParallelSearch::with_params(&board, Color::White, shallow());
    let reports: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reports);
    engine.set_progress_callback(Arc::new(move |fraction| {
        sink.lock().push(fraction);
    }));

    engine.start();
    engine.wait().unwrap();

    let reports = reports.lock();
    assert!(!reports.is_empty());
    assert!(reports.windows(2).all(|w| w[0] <= w[1]));
    assert!(reports.iter().all(|&f| f > 0.0 && f <= 1.0));
    assert_eq!(*reports.last().unwrap(), 1.0);
}

#[test]
fn no_legal_replies_converges_with_no_choice() {
    let mut board = Board::empty();
    board.place(sq(0, 0), ColoredPiece::new(Color::White, Piece::King));
    let mut engine = ParallelSearch::with_params(&board, Color::Black, shallow());
    engine.start();

    assert!(engine.wait().is_none());
    assert_eq!(engine.state(), EngineState::Complete);
    assert!(engine.candidates().is_empty());
    assert!(engine.scores().is_empty());
}

#[test]
fn start_is_idempotent_once_dispatched() {
    let board = Board::new();
    let mut engine = ParallelSearch::with_params(&board, Color::White, shallow());
    engine.start();
    engine.start();
    assert_eq!(engine.candidates().len(), 20);
    assert!(engine.wait().is_some());
}

#[test]
fn engine_moves_its_queen_out_of_danger() {
    let mut board = Board::empty();
    board.place(sq(0, 7), ColoredPiece::new(Color::White, Piece::King));
    board.place(sq(3, 3), ColoredPiece::new(Color::White, Piece::Pawn));
    board.place(sq(7, 7), ColoredPiece::new(Color::Black, Piece::King));
    board.place(sq(4, 2), ColoredPiece::new(Color::Black, Piece::Queen));

    let mut engine =
        ParallelSearch::with_params(&board, Color::Black, SearchParams::default().depth(3));
    engine.start();
    let best = engine.wait().expect("search should complete");

    // The pawn on d4 attacks c5 and e5; the chosen reply keeps the queen
    // off both.
    let queen = ColoredPiece::new(Color::Black, Piece::Queen);
    let queen_sq = (0..64)
        .map(Square::from_index)
        .find(|&sq| best.at(sq) == Some(queen));
    let queen_sq = queen_sq.expect("queen is still on the board");
    assert_ne!(queen_sq, sq(4, 2));
    assert_ne!(queen_sq, sq(4, 4));
}
