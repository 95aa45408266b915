use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

use super::matcher::LiteralMatcher;
use crate::results::MatchRecord;

const BUFFER_CAPACITY: usize = 8192; // Initial buffer size for reading files

/// Scans one file at a time against a literal pattern.
///
/// Reading happens entirely outside any shared critical section; only the
/// returned records ever touch shared state, in the caller.
#[derive(Debug, Clone)]
pub struct FileProcessor {
    matcher: LiteralMatcher,
}

impl FileProcessor {
    pub fn new(matcher: LiteralMatcher) -> Self {
        Self { matcher }
    }

    /// Reads `path` line by line and returns a record for every line that
    /// contains the pattern, in line-encounter order.
    ///
    /// Only an open failure is returned to the caller, which treats it as a
    /// per-file skip. A file that opens but then fails mid-read keeps the
    /// records gathered so far and still counts as visited. Lines are split
    /// on `\n`; a trailing `\r` is stripped so CRLF files report the same
    /// columns as LF files. Non-UTF-8 bytes are decoded lossily for the
    /// record text.
    pub fn scan_file(&self, path: &Path) -> io::Result<Vec<MatchRecord>> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(BUFFER_CAPACITY, file);

        let mut records = Vec::new();
        let mut buffer = Vec::with_capacity(256);

        loop {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    debug!(
                        "Read error in {} after {} records: {}",
                        path.display(),
                        records.len(),
                        e
                    );
                    break;
                }
            }
            if buffer.last() == Some(&b'\n') {
                buffer.pop();
                if buffer.last() == Some(&b'\r') {
                    buffer.pop();
                }
            }

            let line = String::from_utf8_lossy(&buffer);
            if let Some(column) = self.matcher.find_in_line(&line) {
                records.push(MatchRecord {
                    column,
                    line: line.into_owned(),
                });
            }
        }

        trace!("Found {} matches in {}", records.len(), path.display());
        Ok(records)
    }
}
