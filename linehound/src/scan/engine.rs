use tracing::{debug, info};

use super::matcher::LiteralMatcher;
use super::pool::run_workers;
use crate::config::ScanConfig;
use crate::errors::ScanResult;
use crate::results::RunResult;
use crate::walker::discover_files;

/// Performs a concurrent scan of the configured directory tree.
///
/// Discovery is a batch step: the whole tree is enumerated first, then the
/// worker pool drains the resulting path list. Returns
/// [`crate::ScanError::EmptyWorkload`] when the tree holds no regular files.
pub fn scan(config: &ScanConfig) -> ScanResult<RunResult> {
    info!(
        "Starting scan for {:?} under {} with {} workers",
        config.pattern,
        config.root_path.display(),
        config.thread_count
    );

    let files = discover_files(&config.root_path);
    debug!("Found {} files to scan", files.len());

    let result = run_workers(
        files,
        LiteralMatcher::new(config.pattern.clone()),
        config.thread_count,
    )?;

    info!(
        "Scan complete: {} occurrences in {} of {} files",
        result.pattern_occurrences, result.files_with_pattern, result.files_searched
    );
    Ok(result)
}
