use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

/// Shared FIFO of paths awaiting a worker.
///
/// The queue is populated once, before any worker starts, and only shrinks
/// afterwards. `try_claim` is a single critical section: the emptiness check
/// and the pop happen under one lock, so no two callers can ever receive the
/// same path. Once a caller observes Empty it stays empty, so workers exit
/// instead of waiting.
#[derive(Debug, Default)]
pub struct PathQueue {
    paths: Mutex<VecDeque<PathBuf>>,
}

impl PathQueue {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            paths: Mutex::new(paths.into_iter().collect()),
        }
    }

    /// Atomically removes and returns the head of the queue, or `None` once
    /// the queue has drained.
    pub fn try_claim(&self) -> Option<PathBuf> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<PathBuf>> {
        // A poisoned lock means a worker panicked mid-claim; the orchestrator
        // escalates that on join, so the queue itself keeps serving.
        self.paths
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn paths(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("file_{i}.txt"))).collect()
    }

    #[test]
    fn test_claim_is_fifo() {
        let queue = PathQueue::new(paths(3));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.try_claim(), Some(PathBuf::from("file_0.txt")));
        assert_eq!(queue.try_claim(), Some(PathBuf::from("file_1.txt")));
        assert_eq!(queue.try_claim(), Some(PathBuf::from("file_2.txt")));
        assert_eq!(queue.try_claim(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_is_permanent() {
        let queue = PathQueue::new(Vec::new());
        assert_eq!(queue.try_claim(), None);
        assert_eq!(queue.try_claim(), None);
    }

    #[test]
    fn test_concurrent_claims_are_exclusive() {
        let total = 1000;
        let queue = Arc::new(PathQueue::new(paths(total)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    let mut claimed = Vec::new();
                    while let Some(path) = queue.try_claim() {
                        claimed.push(path);
                    }
                    claimed
                })
            })
            .collect();

        let mut seen = HashSet::new();
        let mut claimed_total = 0;
        for handle in handles {
            for path in handle.join().unwrap() {
                claimed_total += 1;
                assert!(seen.insert(path), "a path was claimed twice");
            }
        }

        assert_eq!(claimed_total, total);
        assert!(queue.is_empty());
    }
}
