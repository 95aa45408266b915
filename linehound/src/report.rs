//! Serializers for the two scan artifacts.
//!
//! The results artifact lists every matching line as `path:column: text`,
//! grouped by file in path order. The activity artifact lists each worker's
//! visited file names in the ranked order produced by the engine; the ranking
//! is a core contract and is not re-derived here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::errors::ScanResult;
use crate::results::RunResult;

/// Writes the per-match results artifact: one `path:column: text` line per
/// match record, grouped by file.
pub fn write_results(result: &RunResult, path: &Path) -> ScanResult<()> {
    let mut out = BufWriter::new(File::create(path)?);

    for (file, records) in &result.matches {
        for record in records {
            writeln!(out, "{}:{}: {}", file.display(), record.column, record.line)?;
        }
    }

    out.flush()?;
    info!(
        "Wrote {} match records to {}",
        result.total_records(),
        path.display()
    );
    Ok(())
}

/// Writes the ranked worker-activity artifact: one `workerId: a.txt,b.txt`
/// line per worker, busiest worker first.
pub fn write_activity_log(result: &RunResult, path: &Path) -> ScanResult<()> {
    let mut out = BufWriter::new(File::create(path)?);

    for (worker, visits) in &result.activity {
        let names: Vec<String> = visits.iter().map(|p| file_name(p)).collect();
        writeln!(out, "{}: {}", worker, names.join(","))?;
    }

    out.flush()?;
    info!(
        "Wrote activity for {} workers to {}",
        result.activity.len(),
        path.display()
    );
    Ok(())
}

/// Final path component, falling back to the full path for oddities like `..`
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
