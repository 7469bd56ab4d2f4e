//! # Slice Store Testing
//!
//! Testing utilities and helpers for the slice-store architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits (`FixedClock`)
//! - The fluent [`ReducerTest`] harness for Given-When-Then reducer tests
//! - A tracing initializer for test binaries
//!
//! ## Example
//!
//! ```ignore
//! use slice_store_testing::{test_clock, ReducerTest};
//!
//! ReducerTest::new(AccountReducer::new())
//!     .with_env(BankEnvironment::new(Arc::new(test_clock())))
//!     .given_state(AccountState::default())
//!     .when_action(deposit(Money::from_dollars(500)))
//!     .then_state(|state| {
//!         assert_eq!(state.balance, Money::from_dollars(500));
//!     })
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use slice_store_core::environment::Clock;

/// Fluent Given-When-Then testing for reducers
pub mod reducer_test;

pub use mocks::{test_clock, FixedClock};
pub use reducer_test::ReducerTest;

/// Deterministic stand-ins for environment capabilities
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// A clock pinned to a single instant
    ///
    /// Reducers that stamp timestamps become deterministic when driven by
    /// this clock: every `now()` call returns the instant it was built with.
    ///
    /// # Example
    ///
    /// ```
    /// use slice_store_testing::mocks::FixedClock;
    /// use slice_store_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Pin the clock to `time`
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// The fixed clock used across the test suites (2024-06-01 09:30:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which it never does.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2024-06-01T09:30:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Initialize a plain fmt tracing subscriber for tests
///
/// Safe to call from multiple tests; only the first call installs the
/// subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}
