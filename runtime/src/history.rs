//! Bounded snapshot history.
//!
//! Every dispatch replaces the store's held snapshot with a new one; the
//! replaced snapshot stays valid for any holder. The history retains the most
//! recent replaced snapshots in a bounded FIFO so callers can diff state
//! across dispatches without wiring their own subscription.

use crate::now_nanos;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A replaced state snapshot with metadata about when it was superseded
#[derive(Debug, Clone)]
pub struct SnapshotEntry<S> {
    /// The snapshot as it was before the dispatch that replaced it
    pub state: S,

    /// Dispatch sequence number that replaced this snapshot (0-based)
    pub seq: u64,

    /// Timestamp when the snapshot was replaced (nanoseconds since epoch)
    pub replaced_at: u64,
}

impl<S> SnapshotEntry<S> {
    fn new(state: S, seq: u64) -> Self {
        Self {
            state,
            seq,
            replaced_at: now_nanos(),
        }
    }
}

/// Bounded FIFO of replaced snapshots
///
/// Oldest entries are dropped when the history is at capacity. Thread-safe;
/// clones share the same underlying queue.
///
/// # Example
///
/// ```
/// use slice_store_runtime::SnapshotHistory;
///
/// let history: SnapshotHistory<i64> = SnapshotHistory::new(2);
/// history.record(1, 0);
/// history.record(2, 1);
/// history.record(3, 2); // drops the oldest
///
/// let entries = history.entries();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].state, 2);
/// ```
#[derive(Debug)]
pub struct SnapshotHistory<S> {
    /// The queue storage
    queue: Arc<Mutex<VecDeque<SnapshotEntry<S>>>>,

    /// Maximum number of retained snapshots
    capacity: usize,
}

impl<S> SnapshotHistory<S> {
    /// Create a new history with the given capacity
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
            capacity,
        }
    }

    /// Record a replaced snapshot
    ///
    /// If the history is at capacity, the oldest entry is dropped. A
    /// zero-capacity history retains nothing.
    pub fn record(&self, state: S, seq: u64) {
        if self.capacity == 0 {
            metrics::counter!("store.history.dropped").increment(1);
            return;
        }

        let mut queue = self
            .queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        // Drop oldest if at capacity
        if queue.len() >= self.capacity {
            queue.pop_front();
            metrics::counter!("store.history.dropped").increment(1);
            tracing::debug!(
                capacity = self.capacity,
                "Snapshot history at capacity, dropping oldest entry"
            );
        }

        queue.push_back(SnapshotEntry::new(state, seq));

        // Intentional cast for metrics - queue size is bounded by capacity (usize) and f64
        // can represent all practical queue sizes exactly
        #[allow(clippy::cast_precision_loss)]
        metrics::gauge!("store.history.size").set(queue.len() as f64);
    }

    /// Get the current number of retained snapshots
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Check if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All retained entries, oldest first
    #[must_use]
    pub fn entries(&self) -> Vec<SnapshotEntry<S>>
    where
        S: Clone,
    {
        self.queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// The most recently replaced snapshot, if any
    #[must_use]
    pub fn latest(&self) -> Option<SnapshotEntry<S>>
    where
        S: Clone,
    {
        self.queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .back()
            .cloned()
    }

    /// Discard all retained snapshots
    pub fn clear(&self) {
        let mut queue = self
            .queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let count = queue.len();
        queue.clear();

        metrics::gauge!("store.history.size").set(0.0);
        tracing::debug!(count, "Cleared snapshot history");
    }

    /// Get the maximum number of retained snapshots
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<S> Clone for SnapshotHistory<S> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
            capacity: self.capacity,
        }
    }
}

impl<S> Default for SnapshotHistory<S> {
    fn default() -> Self {
        Self::new(64)
    }
}
