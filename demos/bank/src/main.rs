//! Bank demo binary.
//!
//! Replays the seed scenario through a single store, subscribing to the
//! store and printing each committed state snapshot as it arrives.

use bank::actions::{create_customer, deposit, pay_loan, request_loan, update_name, withdraw};
use bank::{bank_store, BankEnvironment, BankState, Money};
use slice_store_core::environment::{Clock, SystemClock};
use std::sync::{mpsc, Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_committed(snapshots: &mpsc::Receiver<BankState>) -> anyhow::Result<()> {
    println!("{}\n", serde_json::to_string_pretty(&snapshots.recv()?)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank=debug,slice_store_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Bank: single-store reducer demo ===\n");

    let env = BankEnvironment::new(Arc::new(SystemClock));
    let store = bank_store(env.clone());
    let snapshots = store.subscribe();
    tracing::info!("Replaying seed scenario against a fresh store");

    println!(">>> deposit $500");
    store.dispatch(deposit(Money::from_dollars(500)));
    print_committed(&snapshots)?;

    println!(">>> withdraw $200");
    store.dispatch(withdraw(Money::from_dollars(200)));
    print_committed(&snapshots)?;

    println!(">>> request loan $1000 (Buy a car)");
    store.dispatch(request_loan(Money::from_dollars(1000), "Buy a car"));
    print_committed(&snapshots)?;

    println!(">>> request a second loan while one is outstanding (silently ignored)");
    store.dispatch(request_loan(Money::from_dollars(5000), "Buy a boat"));
    print_committed(&snapshots)?;

    println!(">>> pay loan");
    store.dispatch(pay_loan());
    print_committed(&snapshots)?;

    println!(">>> create customer");
    let created_at = env.clock.now();
    store.dispatch(create_customer(
        "Murodjon Muzaffarov",
        "12345ADB",
        created_at,
    ));
    print_committed(&snapshots)?;

    println!(">>> update name");
    store.dispatch(update_name("Murodjon M."));
    print_committed(&snapshots)?;

    println!(
        "Dispatched {} actions; {} previous snapshots retained in history",
        store.dispatch_count(),
        store.history().len()
    );

    Ok(())
}
