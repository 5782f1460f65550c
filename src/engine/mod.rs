//! Engine-turn orchestration.

mod coordinator;

pub use coordinator::{EngineState, ParallelSearch, ProgressCallback, POLL_INTERVAL_MS};
