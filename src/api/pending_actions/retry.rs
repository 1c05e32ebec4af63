//! Speeding up a pending transaction by resubmitting it at a higher gas
//! price.

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::instrument;

use super::gas::increase_last_gas_price;
use super::ActivityDispatcher;
use super::PendingActionError;
use super::Sidebar;
use super::SidebarKind;
use super::SIDEBAR_LEFT_TRANSITION;
use crate::models::state::WalletSnapshot;
use crate::models::transaction::token_data::TokenData;
use crate::models::transaction::token_data::TOKEN_METHOD_TRANSFER;
use crate::models::transaction::TransactionGroup;

/// A transaction must have been pending this long before it can be sped up.
pub const RETRY_DELAY_MS: u64 = 5_000;

/// Network-wide gas price levels, in gwei, and timing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicGasEstimates {
    pub safe_low: f64,
    pub average: f64,
    pub fast: f64,
    pub fastest: f64,

    /// seconds between blocks
    pub block_time: f64,
    pub block_num: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAndTimeEstimate {
    /// gwei
    pub gasprice: f64,

    /// minutes
    pub expected_wait: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEstimates {
    pub price_and_time_estimates: Vec<PriceAndTimeEstimate>,
}

/// Source of gas price estimates, usually a remote service.
#[async_trait]
pub trait GasEstimator: Send + Sync {
    async fn fetch_basic_gas_and_time_estimates(&self) -> anyhow::Result<BasicGasEstimates>;

    async fn fetch_gas_estimates(&self, block_time: f64) -> anyhow::Result<GasEstimates>;
}

fn estimate_error(error: anyhow::Error) -> PendingActionError {
    PendingActionError::Estimate(format!("{error:#}"))
}

/// Speeding up one transaction group.
#[derive(Debug, Clone, Copy)]
pub struct RetryTransaction<'a> {
    group: &'a TransactionGroup,
    snapshot: &'a WalletSnapshot,
    is_earliest_nonce: bool,
}

impl<'a> RetryTransaction<'a> {
    /// `is_earliest_nonce` tells whether the group holds the lowest pending
    /// nonce of its account; only that group can usefully be sped up.
    pub fn new(
        group: &'a TransactionGroup,
        snapshot: &'a WalletSnapshot,
        is_earliest_nonce: bool,
    ) -> Self {
        Self {
            group,
            snapshot,
            is_earliest_nonce,
        }
    }

    /// true if speeding up should be offered at `now_ms` (milliseconds since
    /// the unix epoch).
    pub fn retry_enabled(&self, now_ms: u64) -> bool {
        let waited_long_enough = self
            .group
            .earliest_transaction()
            .submitted_time
            .is_some_and(|submitted| now_ms.saturating_sub(submitted) > RETRY_DELAY_MS);

        waited_long_enough && self.is_earliest_nonce && !self.group.has_retried
    }

    /// true if the primary transaction calls a token's `transfer` method.
    pub fn is_token_transfer(&self) -> bool {
        let data = self.group.primary_transaction.tx_params.data.as_deref();
        let method_name = self
            .snapshot
            .known_method_data(data)
            .and_then(|method| method.name.clone())
            .or_else(|| data.and_then(TokenData::decode).map(|decoded| decoded.name));

        method_name.is_some_and(|name| name == TOKEN_METHOD_TRANSFER)
    }

    /// Select the token being transferred, so the gas editor shows it.
    /// Returns whether a token was selected.
    pub fn select_token_if_transfer(&self, dispatcher: &dyn ActivityDispatcher) -> bool {
        if !self.is_token_transfer() {
            return false;
        }
        dispatcher.set_selected_token(self.group.initial_transaction.tx_params.to.clone());
        true
    }

    /// Fetch fresh estimates, then prefill the gas editor for a replacement
    /// transaction and open it.
    ///
    /// The steps run strictly in order. Nothing is dispatched unless both
    /// estimates arrive. Concurrent calls are not coalesced; the last one to
    /// finish leaves its gas settings in place.
    #[instrument(skip_all, fields(group = self.group.id()))]
    pub async fn show_retry_dialog(
        &self,
        estimator: &dyn GasEstimator,
        dispatcher: &dyn ActivityDispatcher,
    ) -> Result<(), PendingActionError> {
        let basic = estimator
            .fetch_basic_gas_and_time_estimates()
            .await
            .map_err(estimate_error)?;
        let estimates = estimator
            .fetch_gas_estimates(basic.block_time)
            .await
            .map_err(estimate_error)?;
        debug!(
            "fetched {} gas estimates for block time {}",
            estimates.price_and_time_estimates.len(),
            basic.block_time
        );

        self.retry_transaction(dispatcher)
    }

    fn retry_transaction(&self, dispatcher: &dyn ActivityDispatcher) -> Result<(), PendingActionError> {
        let transaction = &self.group.initial_transaction;

        let increased = self
            .group
            .primary_transaction
            .tx_params
            .gas_price
            .as_deref()
            .map(increase_last_gas_price)
            .transpose()?;
        let gas_price = increased
            .or_else(|| transaction.tx_params.gas_price.clone())
            .ok_or_else(|| {
                PendingActionError::Failed(format!(
                    "transaction {} has no gas price to increase",
                    transaction.id
                ))
            })?;

        dispatcher.set_custom_gas_price_for_retry(gas_price);
        dispatcher.set_custom_gas_limit(transaction.tx_params.gas.clone());
        dispatcher.show_sidebar(Sidebar {
            transition_name: SIDEBAR_LEFT_TRANSITION.to_owned(),
            kind: SidebarKind::CustomizeGas,
            transaction: transaction.clone(),
        });
        Ok(())
    }
}
