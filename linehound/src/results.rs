use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Identity of a single scan worker, issued by the orchestrator at spawn
/// time. Issued sequentially, so ordering by `WorkerId` is ordering by
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerId(pub usize);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single matching line within a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// 0-based byte offset of the first pattern occurrence in the line
    pub column: usize,
    /// The content of the line, without its trailing line break
    pub line: String,
}

/// The complete outcome of one scan run, available once every worker has
/// terminated.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    /// Number of paths handed to the engine, fixed before any worker runs.
    /// Files that later fail to open still count.
    pub files_searched: usize,
    /// Number of distinct files containing at least one match
    pub files_with_pattern: usize,
    /// Total number of matching lines across all files
    pub pattern_occurrences: usize,
    /// Match records per file, keyed in path order; files without matches
    /// have no entry
    pub matches: BTreeMap<PathBuf, Vec<MatchRecord>>,
    /// Visit sequences per worker, ranked by descending workload with ties
    /// kept in worker-registration order
    pub activity: Vec<(WorkerId, Vec<PathBuf>)>,
}

impl RunResult {
    /// Total number of match records across all files
    pub fn total_records(&self) -> usize {
        self.matches.values().map(Vec::len).sum()
    }
}
