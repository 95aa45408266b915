use dashmap::DashMap;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::results::{MatchRecord, WorkerId};

/// Thread-safe map from file path to the match records found in that file.
///
/// Each key is written by exactly one worker (the one that claimed the path),
/// so per-file record order is the worker's line-encounter order. The map has
/// its own internal locking, independent of the queue and the activity log.
#[derive(Debug, Default)]
pub struct MatchStore {
    matches: DashMap<PathBuf, Vec<MatchRecord>>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the matches for a fully scanned file. Called at most once per
    /// path, with a non-empty record list; files without matches get no entry.
    pub fn record_matches(&self, path: PathBuf, records: Vec<MatchRecord>) {
        debug_assert!(!records.is_empty(), "empty record lists are not stored");
        self.matches.insert(path, records);
    }

    /// Snapshot of the completed mapping in path order. Meaningful only after
    /// every worker has joined.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<MatchRecord>> {
        self.matches
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

/// Thread-safe map from worker identity to the paths that worker processed,
/// in claim order.
///
/// Workers are registered at spawn time so that an idle worker still appears
/// in the final report with an empty sequence. Each worker appends only to
/// its own sequence.
#[derive(Debug, Default)]
pub struct ActivityLog {
    visits: DashMap<WorkerId, Vec<PathBuf>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a worker with an empty visit sequence.
    pub fn register(&self, id: WorkerId) {
        self.visits.entry(id).or_default();
    }

    /// Appends `path` to the worker's visit sequence.
    pub fn record_visit(&self, id: WorkerId, path: PathBuf) {
        self.visits.entry(id).or_default().push(path);
    }

    /// Visit sequences ranked by descending length, ties kept in worker
    /// registration order. This ordering is a reporting contract. Meaningful
    /// only after every worker has joined.
    pub fn ranked(&self) -> Vec<(WorkerId, Vec<PathBuf>)> {
        let mut rows: Vec<(WorkerId, Vec<PathBuf>)> = self
            .visits
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        // Ids are issued in registration order; a stable sort on length then
        // preserves that order across equal workloads.
        rows.sort_unstable_by_key(|(id, _)| *id);
        rows.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        rows
    }
}

/// Run-level counters shared by all workers, read after the join barrier.
#[derive(Debug, Default)]
pub struct ScanCounters {
    files_with_pattern: AtomicUsize,
    pattern_occurrences: AtomicUsize,
}

impl ScanCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a file's first match; called once per matching file.
    pub fn record_file_with_pattern(&self) {
        self.files_with_pattern.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts `n` matching lines.
    pub fn record_occurrences(&self, n: usize) {
        self.pattern_occurrences.fetch_add(n, Ordering::Relaxed);
    }

    pub fn files_with_pattern(&self) -> usize {
        self.files_with_pattern.load(Ordering::Relaxed)
    }

    pub fn pattern_occurrences(&self) -> usize {
        self.pattern_occurrences.load(Ordering::Relaxed)
    }
}
