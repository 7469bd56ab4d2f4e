//! # Slice Store Runtime
//!
//! Runtime implementation for the slice-store architecture.
//!
//! This crate provides the Store: the single owner of the current combined
//! state, which applies actions through a reducer and exposes read access.
//!
//! ## Core Components
//!
//! - **Store**: holds one state snapshot, replaced atomically on each dispatch
//! - **Snapshot history**: bounded FIFO of replaced snapshots
//! - **Subscription**: channel of committed snapshots for observers
//!
//! ## Example
//!
//! ```ignore
//! use slice_store_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! store.dispatch(Action::DoSomething);
//!
//! let value = store.state(|s| s.some_field);
//! ```

use std::time::Duration;

/// Bounded history of replaced state snapshots
pub mod history;

/// The Store runtime
pub mod store;

pub use history::{SnapshotEntry, SnapshotHistory};
pub use store::Store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// The store itself cannot fail: dispatch is a total, synchronous
    /// computation and unknown actions are a no-op by contract. The only
    /// failure the runtime can observe is a poisoned state lock, left behind
    /// when a reducer panicked on another thread.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// The state lock was poisoned by a panicking reducer
        ///
        /// Snapshots are committed by whole-value replacement, so the held
        /// state is still the last committed snapshot and the convenience
        /// accessors recover from this automatically. The checked accessors
        /// surface it so embedding hosts can notice the panic.
        #[error("State lock poisoned by a panicked reducer")]
        Poisoned,
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use slice_store_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_history_capacity(256);
/// assert_eq!(config.history_capacity, 256);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of replaced snapshots retained in history
    pub history_capacity: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(history_capacity: usize) -> Self {
        Self { history_capacity }
    }

    /// Set the snapshot history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history_capacity: 64,
        }
    }
}

/// Nanoseconds since the Unix epoch, for ordering history entries
pub(crate) fn now_nanos() -> u64 {
    // Note: Truncation acceptable for nanosecond timestamps (wraps every ~584 years)
    #[allow(clippy::cast_possible_truncation)]
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos() as u64;
    nanos
}
