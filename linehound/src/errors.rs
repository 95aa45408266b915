use thiserror::Error;

use crate::results::WorkerId;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during a scan run.
///
/// Per-file open and read failures are deliberately absent: the scan loop
/// tolerates them by skipping the file, so they never surface as a run-level
/// error.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("No files to scan")]
    EmptyWorkload,
    #[error("Worker {id} panicked during the scan")]
    WorkerPanicked { id: WorkerId },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn worker_panicked(id: WorkerId) -> Self {
        Self::WorkerPanicked { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ScanError::config_error("missing pattern");
        assert!(matches!(err, ScanError::Config(_)));

        let err = ScanError::worker_panicked(WorkerId(3));
        assert!(matches!(err, ScanError::WorkerPanicked { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = ScanError::config_error("missing pattern");
        assert_eq!(err.to_string(), "Configuration error: missing pattern");

        let err = ScanError::EmptyWorkload;
        assert_eq!(err.to_string(), "No files to scan");

        let err = ScanError::worker_panicked(WorkerId(7));
        assert_eq!(err.to_string(), "Worker 7 panicked during the scan");
    }
}
