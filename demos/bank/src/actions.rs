//! Action creators.
//!
//! Helpers that build well-formed [`BankAction`] values from plain arguments,
//! decoupling callers from the action's literal shape. Every creator is pure:
//! [`create_customer`] takes its timestamp as an argument instead of reading a
//! clock, so callers stamp it from their injected `Clock` capability.

use crate::types::{BankAction, Money};
use chrono::{DateTime, Utc};

/// Credit the balance by `amount`
#[must_use]
pub const fn deposit(amount: Money) -> BankAction {
    BankAction::Deposit { amount }
}

/// Debit the balance by `amount`
#[must_use]
pub const fn withdraw(amount: Money) -> BankAction {
    BankAction::Withdraw { amount }
}

/// Take out a loan of `amount` for `purpose`
#[must_use]
pub fn request_loan(amount: Money, purpose: impl Into<String>) -> BankAction {
    BankAction::RequestLoan {
        amount,
        purpose: purpose.into(),
    }
}

/// Pay off the outstanding loan
#[must_use]
pub const fn pay_loan() -> BankAction {
    BankAction::PayLoan
}

/// Create the customer profile, stamped with `created_at`
#[must_use]
pub fn create_customer(
    full_name: impl Into<String>,
    national_id: impl Into<String>,
    created_at: DateTime<Utc>,
) -> BankAction {
    BankAction::CreateCustomer {
        full_name: full_name.into(),
        national_id: national_id.into(),
        created_at,
    }
}

/// Replace the customer's full name
#[must_use]
pub fn update_name(full_name: impl Into<String>) -> BankAction {
    BankAction::UpdateName {
        full_name: full_name.into(),
    }
}
