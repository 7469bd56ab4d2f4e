//! Customer slice reducer.
//!
//! Handles profile creation and name updates. The creation timestamp arrives
//! inside the action, stamped by the caller from its clock, so the reducer
//! stays fully deterministic.

use crate::types::{BankAction, CustomerState};
use crate::BankEnvironment;
use slice_store_core::reducer::Reducer;

/// Reducer for the customer slice
#[derive(Clone, Copy, Debug, Default)]
pub struct CustomerReducer;

impl CustomerReducer {
    /// Creates a new `CustomerReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CustomerReducer {
    type State = CustomerState;
    type Action = BankAction;
    type Environment = BankEnvironment;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            BankAction::CreateCustomer {
                full_name,
                national_id,
                created_at,
            } => {
                state.full_name = full_name;
                state.national_id = national_id;
                state.created_at = Some(created_at);
            }

            BankAction::UpdateName { full_name } => {
                state.full_name = full_name;
            }

            // Account slice actions - leave state unchanged
            BankAction::Deposit { .. }
            | BankAction::Withdraw { .. }
            | BankAction::RequestLoan { .. }
            | BankAction::PayLoan => {}
        }
    }
}
