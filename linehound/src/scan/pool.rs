use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tracing::{debug, trace};

use super::matcher::LiteralMatcher;
use super::processor::FileProcessor;
use super::queue::PathQueue;
use super::stores::{ActivityLog, MatchStore, ScanCounters};
use crate::errors::{ScanError, ScanResult};
use crate::results::{RunResult, WorkerId};

/// Runs a fixed pool of worker threads over `paths` and blocks until every
/// worker has terminated.
///
/// All paths are enqueued before the first worker spawns; the queue only
/// drains afterwards. Exactly `worker_count` threads are spawned, each with a
/// sequentially issued [`WorkerId`]. Workers that find the queue already
/// empty terminate immediately and appear in the activity ranking with an
/// empty sequence.
///
/// `files_searched` in the returned [`RunResult`] is the number of paths
/// handed in, fixed here before any worker runs; files that fail to open are
/// skipped by their worker without affecting it.
///
/// # Errors
///
/// Returns [`ScanError::EmptyWorkload`] for an empty path list (fail fast,
/// before any thread spawns) and [`ScanError::WorkerPanicked`] if a worker
/// panics mid-scan, since the aggregates can no longer be trusted. A worker
/// count below one is unrepresentable by `NonZeroUsize`.
pub fn run_workers(
    paths: Vec<PathBuf>,
    matcher: LiteralMatcher,
    worker_count: NonZeroUsize,
) -> ScanResult<RunResult> {
    if paths.is_empty() {
        return Err(ScanError::EmptyWorkload);
    }

    let files_searched = paths.len();
    let queue = Arc::new(PathQueue::new(paths));
    let store = Arc::new(MatchStore::new());
    let log = Arc::new(ActivityLog::new());
    let counters = Arc::new(ScanCounters::new());
    let processor = Arc::new(FileProcessor::new(matcher));

    debug!(
        "Spawning {} workers for {} files",
        worker_count, files_searched
    );

    let mut handles = Vec::with_capacity(worker_count.get());
    for i in 0..worker_count.get() {
        let id = WorkerId(i);
        log.register(id);

        let queue = Arc::clone(&queue);
        let store = Arc::clone(&store);
        let log = Arc::clone(&log);
        let counters = Arc::clone(&counters);
        let processor = Arc::clone(&processor);

        let handle = thread::Builder::new()
            .name(format!("linehound-worker-{i}"))
            .spawn(move || worker_loop(id, &queue, &processor, &store, &log, &counters))?;
        handles.push(handle);
    }

    // Join barrier: every worker runs to completion before the aggregates
    // are read. A panicked worker is run-fatal, but the remaining workers
    // are still joined first so no thread outlives the run.
    let mut panicked = None;
    for (i, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() && panicked.is_none() {
            panicked = Some(WorkerId(i));
        }
    }
    if let Some(id) = panicked {
        return Err(ScanError::worker_panicked(id));
    }

    Ok(RunResult {
        files_searched,
        files_with_pattern: counters.files_with_pattern(),
        pattern_occurrences: counters.pattern_occurrences(),
        matches: store.snapshot(),
        activity: log.ranked(),
    })
}

/// One worker: claim a path, scan it, record the outcome, repeat until the
/// queue drains.
fn worker_loop(
    id: WorkerId,
    queue: &PathQueue,
    processor: &FileProcessor,
    store: &MatchStore,
    log: &ActivityLog,
    counters: &ScanCounters,
) {
    while let Some(path) = queue.try_claim() {
        trace!("Worker {} claimed {}", id, path.display());

        // The file is read outside every shared critical section. Only an
        // open failure skips the file; every successfully opened file is
        // visited, even if reading fails partway through.
        let records = match processor.scan_file(&path) {
            Ok(records) => records,
            Err(e) => {
                // Recoverable per-file skip: no visit, no records, no counts.
                debug!("Worker {} skipping {}: {}", id, path.display(), e);
                continue;
            }
        };

        log.record_visit(id, path.clone());

        if !records.is_empty() {
            counters.record_file_with_pattern();
            counters.record_occurrences(records.len());
            store.record_matches(path, records);
        }
    }
    trace!("Worker {} found the queue empty, terminating", id);
}
