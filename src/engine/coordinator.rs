//! Parallel orchestration of the engine's turn.
//!
//! One worker thread is dispatched per legal root move; each searches its
//! child position independently on its own board copy, so the only shared
//! state is the completion counter and the per-child result slots. Callers
//! drive convergence through the non-blocking [`ParallelSearch::poll`],
//! which reports fractional progress whenever the finished count changes
//! and transitions to `Complete` exactly once, after every worker has
//! reported. Partial results are never exposed. Dispatched workers run to
//! completion; there is no cancellation or deadline path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;

use crate::board::search::{search_with, SearchParams};
use crate::board::{Board, Color};

/// Period of the completion poll used by [`ParallelSearch::wait`]
pub const POLL_INTERVAL_MS: u64 = 200;

/// Worker thread stack size; each ply of the recursion keeps several board
/// copies alive on the stack
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Callback type for fractional progress reports in [0, 1]
pub type ProgressCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// Coordinator lifecycle. `Dispatched` is only observable from inside
/// [`ParallelSearch::start`]; by the time it returns the coordinator is
/// `Polling`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EngineState {
    Idle,
    Dispatched,
    Polling,
    Complete,
}

/// Fans one subtree search per legal root move across worker threads and
/// reduces the collected scores to a single chosen child position.
pub struct ParallelSearch {
    board: Board,
    side: Color,
    params: SearchParams,
    children: Vec<Board>,
    slots: Arc<Mutex<Vec<Option<i32>>>>,
    finished: Arc<AtomicUsize>,
    handles: Vec<JoinHandle<()>>,
    scores: Vec<i32>,
    last_reported: usize,
    state: EngineState,
    on_progress: Option<ProgressCallback>,
}

impl ParallelSearch {
    /// Create an idle coordinator for `side` to move on `board`.
    #[must_use]
    pub fn new(board: &Board, side: Color) -> Self {
        Self::with_params(board, side, SearchParams::default())
    }

    /// Create an idle coordinator with explicit search parameters.
    #[must_use]
    pub fn with_params(board: &Board, side: Color, params: SearchParams) -> Self {
        ParallelSearch {
            board: board.clone(),
            side,
            params,
            children: Vec::new(),
            slots: Arc::new(Mutex::new(Vec::new())),
            finished: Arc::new(AtomicUsize::new(0)),
            handles: Vec::new(),
            scores: Vec::new(),
            last_reported: 0,
            state: EngineState::Idle,
            on_progress: None,
        }
    }

    /// Attach a callback invoked with completed/total whenever the
    /// finished count changes.
    pub fn set_progress_callback(&mut self, callback: ProgressCallback) {
        self.on_progress = Some(callback);
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// The root children being searched, in dispatch order. Empty until
    /// [`ParallelSearch::start`] runs.
    #[must_use]
    pub fn candidates(&self) -> &[Board] {
        &self.children
    }

    /// The collected per-child scores, order-aligned with
    /// [`ParallelSearch::candidates`]. Empty until the coordinator is
    /// `Complete`.
    #[must_use]
    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    /// Compute the root's legal children once and dispatch one worker per
    /// child searching the opposing side's reply. Returns without
    /// blocking; observe completion through [`ParallelSearch::poll`].
    pub fn start(&mut self) {
        if self.state != EngineState::Idle {
            return;
        }
        self.children = self.board.legal_children(self.side);
        let total = self.children.len();
        *self.slots.lock() = vec![None; total];
        self.finished.store(0, Ordering::Release);
        self.state = EngineState::Dispatched;

        #[cfg(feature = "logging")]
        log::debug!("dispatching {total} root searches for {}", self.side);

        for (index, child) in self.children.iter().enumerate() {
            let child = child.clone();
            let reply_side = self.side.opponent();
            let params = self.params.clone();
            let slots = Arc::clone(&self.slots);
            let finished = Arc::clone(&self.finished);
            let handle = thread::Builder::new()
                .name(format!("root-search-{index}"))
                .stack_size(SEARCH_STACK_SIZE)
                .spawn(move || {
                    let score = search_with(&child, reply_side, &params);
                    // Fill the slot before bumping the counter so a poll
                    // that sees the full count finds every result present.
                    slots.lock()[index] = Some(score);
                    finished.fetch_add(1, Ordering::Release);
                })
                .expect("failed to spawn root search worker");
            self.handles.push(handle);
        }

        self.state = EngineState::Polling;
    }

    /// Check worker completion without blocking.
    ///
    /// Emits a progress report when the finished count changed since the
    /// last poll, and collects the order-aligned scores and transitions to
    /// `Complete` once every worker has reported. Safe to call in any
    /// state; only the owner drives it, so completion state and results
    /// are written from exactly one place.
    pub fn poll(&mut self) -> EngineState {
        if self.state != EngineState::Polling {
            return self.state;
        }
        let total = self.children.len();
        let done = self.finished.load(Ordering::Acquire);

        if done != self.last_reported {
            self.last_reported = done;
            if let Some(callback) = &self.on_progress {
                callback(done as f32 / total as f32);
            }
        }

        if done == total {
            let collected: Vec<i32> = self.slots.lock().iter().copied().flatten().collect();
            if collected.len() == total {
                self.scores = collected;
                for handle in self.handles.drain(..) {
                    let _ = handle.join();
                }
                self.state = EngineState::Complete;

                #[cfg(feature = "logging")]
                log::debug!("all {total} root searches complete");
            }
        }
        self.state
    }

    /// Block until every worker has reported, then return the chosen
    /// child. Returns `None` immediately if the search was never started.
    pub fn wait(&mut self) -> Option<Board> {
        if self.state == EngineState::Idle {
            return None;
        }
        loop {
            if self.poll() == EngineState::Complete {
                return self.best();
            }
            thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
        }
    }

    /// The chosen child position: valid only once `Complete` and only if a
    /// score was collected for every child; otherwise `None`.
    ///
    /// Selection is the first minimum score irrespective of which side is
    /// to move.
    #[must_use]
    pub fn best(&self) -> Option<Board> {
        if self.state != EngineState::Complete {
            return None;
        }
        if self.scores.len() != self.children.len() || self.scores.is_empty() {
            return None;
        }
        let (index, _) = self
            .scores
            .iter()
            .enumerate()
            .min_by_key(|&(_, score)| *score)?;
        Some(self.children[index].clone())
    }
}
