use num_bigint::BigInt;
use num_traits::Zero;
use tracing::debug;

use super::gas::gas_total;
use super::gas::increase_last_gas_price;
use super::gas::is_balance_sufficient;
use super::ActivityDispatcher;
use super::Modal;
use super::PendingActionError;
use crate::models::state::WalletSnapshot;
use crate::models::transaction::TransactionGroup;

const ZERO_HEX: &str = "0x0";

/// Cancelling a pending transaction group by replacing its primary
/// transaction with a zero-value transaction at a higher gas price.
#[derive(Debug, Clone, Copy)]
pub struct CancelTransaction<'a> {
    group: &'a TransactionGroup,
    snapshot: &'a WalletSnapshot,
}

impl<'a> CancelTransaction<'a> {
    pub fn new(group: &'a TransactionGroup, snapshot: &'a WalletSnapshot) -> Self {
        Self { group, snapshot }
    }

    /// false once a cancellation has been sent for this group.
    pub fn is_cancellable(&self) -> bool {
        !self.group.has_cancelled
    }

    /// true if the selected account can pay for a cancellation at the
    /// increased gas price. false when no account is selected.
    pub fn has_enough_cancel_gas(&self) -> Result<bool, PendingActionError> {
        let Some(account) = self.snapshot.selected_account() else {
            return Ok(false);
        };

        let params = &self.group.primary_transaction.tx_params;
        let gas_price = increase_last_gas_price(params.gas_price.as_deref().unwrap_or(ZERO_HEX))?;
        let gas_total = gas_total(&gas_price, params.gas.as_deref().unwrap_or(ZERO_HEX))?;

        Ok(is_balance_sufficient(
            &BigInt::zero(),
            &gas_total,
            &account.balance,
        )?)
    }

    /// Ask for the cancellation dialog for this group. Does nothing once the
    /// group has been cancelled.
    pub fn cancel(&self, dispatcher: &dyn ActivityDispatcher) {
        if !self.is_cancellable() {
            debug!("transaction group {} already cancelled", self.group.id());
            return;
        }

        dispatcher.show_modal(Modal::CancelTransaction {
            transaction_id: self.group.id(),
            original_gas_price: self.group.primary_transaction.tx_params.gas_price.clone(),
        });
    }
}
