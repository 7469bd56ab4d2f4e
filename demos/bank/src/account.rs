//! Account slice reducer.
//!
//! Handles deposit, withdraw, and the loan lifecycle. The ledger is
//! deliberately permissive: amounts are not checked for sign and withdrawals
//! are not checked against the balance. The single guard is that a new loan is
//! rejected while one is outstanding.

use crate::types::{AccountState, BankAction, Money};
use crate::BankEnvironment;
use slice_store_core::reducer::Reducer;

/// Reducer for the account slice
///
/// Receives every [`BankAction`]; customer actions fall through the explicit
/// unchanged branch.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccountReducer;

impl AccountReducer {
    /// Creates a new `AccountReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for AccountReducer {
    type State = AccountState;
    type Action = BankAction;
    type Environment = BankEnvironment;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            BankAction::Deposit { amount } => {
                state.balance = state.balance + amount;
            }

            BankAction::Withdraw { amount } => {
                state.balance = state.balance - amount;
            }

            BankAction::RequestLoan { amount, purpose } => {
                // One loan at a time
                if state.has_loan() {
                    return;
                }

                // Loan proceeds are credited in the same transition
                state.loan = amount;
                state.loan_purpose = purpose;
                state.balance = state.balance + amount;
            }

            BankAction::PayLoan => {
                // Pays off the loan from the balance; numerically a no-op
                // when no loan is outstanding
                state.balance = state.balance - state.loan;
                state.loan = Money::ZERO;
                state.loan_purpose.clear();
            }

            // Customer slice actions - leave state unchanged
            BankAction::CreateCustomer { .. } | BankAction::UpdateName { .. } => {}
        }
    }
}
