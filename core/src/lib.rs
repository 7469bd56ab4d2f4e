//! # Slice Store Core
//!
//! Core traits and types for the slice-store architecture.
//!
//! This crate provides the fundamental abstractions for building single-store,
//! reducer-based state containers: independent state slices combined into one
//! store, mutated only through dispatched actions.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a slice, or the combined state of all slices
//! - **Action**: A tagged-variant message describing an intended state change
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies via traits (e.g. [`environment::Clock`])
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Unknown actions are a no-op, never an error
//! - Dependency Injection via Environment
//! - Composition over routing: every slice reducer sees every action
//!
//! ## Example
//!
//! ```
//! use slice_store_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`.
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Contract
    ///
    /// A reducer must be pure: given the same state and action it produces the
    /// same next state, and it performs no I/O. An action the reducer does not
    /// recognize must leave the state untouched - reducers share one action
    /// stream, so unknown actions are silently ignored, never an error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for AccountReducer {
    ///     type State = AccountState;
    ///     type Action = BankAction;
    ///     type Environment = BankEnvironment;
    ///
    ///     fn reduce(&self, state: &mut AccountState, action: BankAction, env: &BankEnvironment) {
    ///         match action {
    ///             BankAction::Deposit { amount } => state.balance = state.balance + amount,
    ///             _ => {} // not ours - leave state unchanged
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into the next state
        ///
        /// Mutates `state` in place to produce the next state. The store
        /// runtime calls this against a copy of the current snapshot, so the
        /// previous snapshot is never observed partially updated.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        );
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter. The only capability this system needs
/// is a clock: timestamps are read by callers before constructing actions,
/// keeping reducers and action creators fully deterministic.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use slice_store_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
