//! The concurrent scan engine.
//!
//! A scan run is a batch: every discovered path is enqueued before any
//! worker starts, a fixed pool of worker threads drains the shared queue,
//! and the aggregates are read only after the final join. The three shared
//! structures (path queue, match store, activity log) each sit behind their
//! own critical section so that claiming work, recording a match, and
//! recording a visit never contend with each other.

pub mod engine;
pub mod matcher;
pub mod pool;
pub mod processor;
pub mod queue;
pub mod stores;

pub use engine::scan;
pub use matcher::LiteralMatcher;
pub use pool::run_workers;
pub use processor::FileProcessor;
