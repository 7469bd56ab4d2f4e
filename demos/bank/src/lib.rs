//! Bank demo: two independent state slices - an account and a customer -
//! combined into one store.
//!
//! This crate demonstrates the slice-store architecture end to end:
//!
//! - Slice reducers ([`AccountReducer`], [`CustomerReducer`]) that each see
//!   every action and ignore the ones that are not theirs
//! - A root reducer built from the core composition rules
//!   (`scope_reducer` + `combine_reducers`)
//! - Typed actions built by pure action creators
//! - A clock injected through the environment, consumed by callers before
//!   constructing actions
//!
//! # Quick Start
//!
//! ```
//! use bank::{bank_store, BankEnvironment, Money};
//! use bank::actions::{deposit, withdraw};
//! use slice_store_core::environment::SystemClock;
//! use std::sync::Arc;
//!
//! let env = BankEnvironment::new(Arc::new(SystemClock));
//! let store = bank_store(env);
//!
//! store.dispatch(deposit(Money::from_dollars(500)));
//! store.dispatch(withdraw(Money::from_dollars(200)));
//!
//! assert_eq!(store.state(|s| s.account.balance), Money::from_dollars(300));
//! ```

pub mod account;
pub mod actions;
pub mod customer;
pub mod types;

use slice_store_core::composition::{combine_reducers, scope_reducer, CombinedReducer};
use slice_store_core::environment::Clock;
use slice_store_runtime::Store;
use std::sync::Arc;

// Re-export commonly used types
pub use account::AccountReducer;
pub use customer::CustomerReducer;
pub use types::{AccountState, BankAction, BankState, CustomerState, Money};

/// Environment dependencies shared by the bank reducers
///
/// The reducers themselves never read the clock - timestamps travel inside
/// actions - but callers use it to stamp `create_customer`, keeping the one
/// side-effecting touchpoint of the system behind an injected capability.
#[derive(Clone)]
pub struct BankEnvironment {
    /// Clock for generating timestamps
    pub clock: Arc<dyn Clock>,
}

impl BankEnvironment {
    /// Creates a new `BankEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// The root reducer type for the bank store
pub type BankReducer = CombinedReducer<BankState, BankAction, BankEnvironment>;

/// The fully wired bank store type
pub type BankStore = Store<BankState, BankAction, BankEnvironment, BankReducer>;

/// Build the root reducer: each slice reducer scoped onto its own field,
/// combined so that every action is broadcast to both
#[must_use]
pub fn root_reducer() -> BankReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(
            AccountReducer::new(),
            |state: &BankState| &state.account,
            |state: &mut BankState, account| state.account = account,
        )),
        Box::new(scope_reducer(
            CustomerReducer::new(),
            |state: &BankState| &state.customer,
            |state: &mut BankState, customer| state.customer = customer,
        )),
    ])
}

/// Create a bank store from default state and the root reducer
#[must_use]
pub fn bank_store(environment: BankEnvironment) -> BankStore {
    Store::new(BankState::default(), root_reducer(), environment)
}
