//! Integration tests for the bank store.
//!
//! These drive the full stack - action creators, root reducer, store - the
//! way the demo binary does, and pin down the seed scenario's exact figures.

use bank::actions::{create_customer, deposit, pay_loan, request_loan, update_name, withdraw};
use bank::{bank_store, BankEnvironment, BankState, Money};
use slice_store_core::environment::Clock;
use slice_store_testing::test_clock;
use std::sync::Arc;

fn test_env() -> BankEnvironment {
    BankEnvironment::new(Arc::new(test_clock()))
}

#[test]
fn test_seed_scenario_end_to_end() {
    slice_store_testing::init_tracing();

    let env = test_env();
    let store = bank_store(env.clone());

    assert_eq!(store.snapshot(), BankState::default());

    store.dispatch(deposit(Money::from_dollars(500)));
    assert_eq!(store.state(|s| s.account.balance), Money::from_dollars(500));

    store.dispatch(withdraw(Money::from_dollars(200)));
    assert_eq!(store.state(|s| s.account.balance), Money::from_dollars(300));

    store.dispatch(request_loan(Money::from_dollars(1000), "Buy a car"));
    store.state(|s| {
        assert_eq!(s.account.balance, Money::from_dollars(1300));
        assert_eq!(s.account.loan, Money::from_dollars(1000));
        assert_eq!(s.account.loan_purpose, "Buy a car");
    });

    store.dispatch(pay_loan());
    store.state(|s| {
        assert_eq!(s.account.balance, Money::from_dollars(300));
        assert_eq!(s.account.loan, Money::ZERO);
        assert!(s.account.loan_purpose.is_empty());
    });

    let created_at = env.clock.now();
    store.dispatch(create_customer("Murodjon Muzaffarov", "12345ADB", created_at));
    store.state(|s| {
        assert_eq!(s.customer.full_name, "Murodjon Muzaffarov");
        assert_eq!(s.customer.national_id, "12345ADB");
        assert_eq!(s.customer.created_at, Some(created_at));
        // The account slice is untouched by the customer action
        assert_eq!(s.account.balance, Money::from_dollars(300));
    });

    store.dispatch(update_name("Murodjon M."));
    store.state(|s| {
        assert_eq!(s.customer.full_name, "Murodjon M.");
        assert_eq!(s.customer.created_at, Some(created_at));
    });
}

#[test]
fn test_single_outstanding_loan_guard() {
    let store = bank_store(test_env());

    store.dispatch(request_loan(Money::from_dollars(1000), "Buy a car"));
    store.dispatch(request_loan(Money::from_dollars(5000), "Buy a boat"));

    store.state(|s| {
        assert_eq!(s.account.loan, Money::from_dollars(1000));
        assert_eq!(s.account.loan_purpose, "Buy a car");
        assert_eq!(s.account.balance, Money::from_dollars(1000));
    });

    // Paying off re-arms the guard
    store.dispatch(pay_loan());
    store.dispatch(request_loan(Money::from_dollars(5000), "Buy a boat"));
    store.state(|s| {
        assert_eq!(s.account.loan, Money::from_dollars(5000));
        assert_eq!(s.account.loan_purpose, "Buy a boat");
    });
}

#[test]
fn test_previous_snapshots_survive_dispatch() {
    let store = bank_store(test_env());

    let before = store.snapshot();
    store.dispatch(deposit(Money::from_dollars(500)));

    // The held copy is a detached value snapshot
    assert_eq!(before, BankState::default());

    // And the store's history retained the replaced snapshot too
    let entries = store.history().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].state, BankState::default());
    assert_eq!(entries[0].seq, 0);
}

#[test]
fn test_subscriber_sees_each_committed_snapshot() {
    let store = bank_store(test_env());
    let rx = store.subscribe();

    store.dispatch(deposit(Money::from_dollars(500)));
    store.dispatch(withdraw(Money::from_dollars(200)));

    let first = rx.recv().ok().map(|s| s.account.balance);
    let second = rx.recv().ok().map(|s| s.account.balance);
    assert_eq!(first, Some(Money::from_dollars(500)));
    assert_eq!(second, Some(Money::from_dollars(300)));
}

#[test]
fn test_stores_are_independent() {
    let first = bank_store(test_env());
    let second = bank_store(test_env());

    first.dispatch(deposit(Money::from_dollars(100)));

    assert_eq!(first.state(|s| s.account.balance), Money::from_dollars(100));
    assert_eq!(second.state(|s| s.account.balance), Money::ZERO);
}

#[test]
fn test_cross_slice_actions_are_ignored_not_errors() {
    let env = test_env();
    let store = bank_store(env.clone());

    // A customer action dispatched against a fresh store must leave the
    // account slice at its default, and vice versa
    store.dispatch(update_name("Nobody"));
    assert_eq!(
        store.state(|s| s.account.clone()),
        bank::AccountState::default()
    );

    store.dispatch(deposit(Money::from_dollars(5)));
    store.state(|s| {
        assert_eq!(s.customer.full_name, "Nobody");
        assert!(s.customer.created_at.is_none());
    });
}
