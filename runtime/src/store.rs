//! The Store - runtime coordinator for a reducer.
//!
//! The Store owns exactly one "current" snapshot of state. `dispatch` runs the
//! reducer against a copy of that snapshot and commits the result by whole-value
//! replacement, so the previous snapshot is never mutated in place and remains
//! valid for any holder.

use crate::history::SnapshotHistory;
use crate::{StoreConfig, StoreError};
use slice_store_core::reducer::Reducer;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex, PoisonError, RwLock, RwLockWriteGuard};

/// The Store - single owner of current state
///
/// The Store manages:
/// 1. State (behind `RwLock`, committed by whole-value replacement)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Snapshot history and subscriber notification
///
/// Stores are plain constructible values, not module-level singletons:
/// independent stores coexist freely, which keeps tests isolated.
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Concurrency
///
/// Dispatch is synchronous: the next state is computed and committed before
/// `dispatch` returns, with no queuing or deferred work. The model assumes a
/// single logical dispatcher; the state lock exists only to serialize access
/// when the store is embedded in a threaded host.
///
/// # Example
///
/// ```ignore
/// let store = Store::new(BankState::default(), root_reducer(), env);
///
/// store.dispatch(deposit(Money::from_dollars(500)));
/// let balance = store.state(|s| s.account.balance);
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    history: SnapshotHistory<S>,
    subscribers: Arc<Mutex<Vec<mpsc::Sender<S>>>>,
    /// Dispatch sequence counter, used to order history entries
    seq: Arc<AtomicU64>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// Uses the default configuration (`StoreConfig::default()`).
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting snapshot for the store
    /// - `reducer`: The reducer implementation (business logic)
    /// - `environment`: Injected dependencies
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_config(initial_state, reducer, environment, StoreConfig::default())
    }

    /// Create a new store with custom configuration
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = StoreConfig::default().with_history_capacity(256);
    /// let store = Store::with_config(MyState::default(), MyReducer, my_env, config);
    /// ```
    #[must_use]
    pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            history: SnapshotHistory::new(config.history_capacity),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Dispatch an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Copies the current snapshot
    /// 2. Runs the reducer against the copy
    /// 3. Atomically replaces the held snapshot with the result
    /// 4. Records the previous snapshot in history and notifies subscribers
    ///
    /// All four steps complete before `dispatch` returns. Unknown actions are
    /// a no-op at the reducer level, never an error.
    ///
    /// A poisoned state lock (left by a reducer that panicked on another
    /// thread) is recovered silently; use [`Store::try_dispatch`] to surface
    /// it instead.
    pub fn dispatch(&self, action: A)
    where
        S: Clone,
        A: std::fmt::Debug,
    {
        let guard = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        self.commit(guard, action);
    }

    /// Dispatch an action, surfacing a poisoned state lock
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if a reducer panicked on another
    /// thread while holding the state lock. The held state is still the last
    /// committed snapshot - commits replace the whole value, so a panicking
    /// reducer cannot leave a torn snapshot behind.
    pub fn try_dispatch(&self, action: A) -> Result<(), StoreError>
    where
        S: Clone,
        A: std::fmt::Debug,
    {
        let guard = self.state.write().map_err(|_| StoreError::Poisoned)?;
        self.commit(guard, action);
        Ok(())
    }

    /// Run the reducer and commit the resulting snapshot
    fn commit(&self, mut guard: RwLockWriteGuard<'_, S>, action: A)
    where
        S: Clone,
        A: std::fmt::Debug,
    {
        tracing::debug!(action = ?action, "Dispatching action");

        let mut next = guard.clone();
        self.reducer.reduce(&mut next, action, &self.environment);

        let committed = self.has_subscribers().then(|| next.clone());
        let previous = std::mem::replace(&mut *guard, next);
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        drop(guard);

        self.history.record(previous, seq);
        metrics::counter!("store.dispatch").increment(1);

        if let Some(snapshot) = committed {
            self.notify(snapshot);
        }
    }

    /// Read the current snapshot through a closure
    ///
    /// # Example
    ///
    /// ```ignore
    /// let balance = store.state(|s| s.account.balance);
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Get a copy of the current snapshot
    ///
    /// The returned value is detached: mutating it has no effect on the
    /// store.
    #[must_use]
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.state(Clone::clone)
    }

    /// Get a copy of the current snapshot, surfacing a poisoned state lock
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if a reducer panicked on another
    /// thread while holding the state lock.
    pub fn try_snapshot(&self) -> Result<S, StoreError>
    where
        S: Clone,
    {
        let guard = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    /// Subscribe to committed snapshots
    ///
    /// Every snapshot committed after this call is sent to the returned
    /// receiver. Dropped receivers are pruned on the next notification.
    #[must_use]
    pub fn subscribe(&self) -> mpsc::Receiver<S> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    /// Access the history of replaced snapshots
    ///
    /// Returns a clone sharing the same underlying storage.
    #[must_use]
    pub fn history(&self) -> SnapshotHistory<S> {
        self.history.clone()
    }

    /// Number of dispatches committed so far
    #[must_use]
    pub fn dispatch_count(&self) -> u64 {
        self.seq.load(Ordering::SeqCst)
    }

    fn has_subscribers(&self) -> bool {
        !self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Send a committed snapshot to every live subscriber, pruning dead ones
    fn notify(&self, snapshot: S)
    where
        S: Clone,
    {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            history: self.history.clone(),
            subscribers: Arc::clone(&self.subscribers),
            seq: Arc::clone(&self.seq),
        }
    }
}
