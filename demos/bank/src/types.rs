//! Domain types for the bank demo.
//!
//! Two independent slices - an account and a customer - combined into one
//! store state, mutated only through [`BankAction`] values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Money amount in signed cents
///
/// Signed because the ledger is permissive: withdrawals are not validated
/// against the balance, so a balance may go negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a new `Money` amount from cents
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Creates a `Money` amount from whole dollars
    #[must_use]
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Checks if this amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if this amount is strictly positive
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl std::ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

/// State of the account slice
///
/// Invariant: `loan.is_zero()` exactly when `loan_purpose.is_empty()`. At most
/// one loan is outstanding at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Current balance; no floor is enforced
    pub balance: Money,

    /// Outstanding loan amount, zero when no loan is active
    pub loan: Money,

    /// Purpose of the outstanding loan, empty when no loan is active
    pub loan_purpose: String,
}

impl AccountState {
    /// Whether a loan is currently outstanding
    #[must_use]
    pub const fn has_loan(&self) -> bool {
        self.loan.is_positive()
    }
}

/// State of the customer slice
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerState {
    /// Customer's full name
    pub full_name: String,

    /// National identification string
    pub national_id: String,

    /// Stamped once at creation; never changed by a name update
    pub created_at: Option<DateTime<Utc>>,
}

/// Combined store state: one field per slice
///
/// The slices are independent; no cross-slice invariant exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankState {
    /// The account slice
    pub account: AccountState,

    /// The customer slice
    pub customer: CustomerState,
}

/// All actions the bank store accepts
///
/// A tagged-variant enum rather than stringly-typed `{type, payload}` objects:
/// each variant carries its own typed payload, and the compiler checks every
/// reducer `match` for exhaustiveness. Every dispatched action is broadcast to
/// both slice reducers; each one ignores the variants it does not handle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BankAction {
    /// Credit the balance; the amount's sign is deliberately not validated
    Deposit {
        /// Amount to credit
        amount: Money,
    },

    /// Debit the balance; sufficiency is deliberately not validated
    Withdraw {
        /// Amount to debit
        amount: Money,
    },

    /// Take out a loan; rejected silently while a loan is outstanding
    RequestLoan {
        /// Loan principal, credited to the balance immediately
        amount: Money,
        /// Purpose recorded with the loan
        purpose: String,
    },

    /// Pay off the outstanding loan from the balance
    PayLoan,

    /// Create the customer profile
    CreateCustomer {
        /// Customer's full name
        full_name: String,
        /// National identification string
        national_id: String,
        /// Creation timestamp, stamped by the caller from its clock
        created_at: DateTime<Utc>,
    },

    /// Replace the customer's full name
    UpdateName {
        /// New full name
        full_name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_arithmetic() {
        let balance = Money::from_dollars(5) - Money::from_dollars(12);
        assert_eq!(balance, Money::from_cents(-700));
        assert_eq!(balance + Money::from_dollars(12), Money::from_dollars(5));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(130_050).to_string(), "$1300.50");
        assert_eq!(Money::from_cents(-700).to_string(), "-$7.00");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_default_state_is_empty() {
        let state = BankState::default();
        assert_eq!(state.account.balance, Money::ZERO);
        assert!(!state.account.has_loan());
        assert!(state.account.loan_purpose.is_empty());
        assert!(state.customer.full_name.is_empty());
        assert!(state.customer.created_at.is_none());
    }
}
