//! Cancelling and speeding up transactions that have not been mined yet.
//!
//! Neither workflow touches wallet state itself. They decide whether an
//! action is available and which effects to request, and hand those effects
//! to an [`ActivityDispatcher`] supplied by the caller.

pub mod cancel;
pub mod gas;
pub mod retry;

use serde::Deserialize;
use serde::Serialize;

pub use self::cancel::CancelTransaction;
pub use self::retry::BasicGasEstimates;
pub use self::retry::GasEstimates;
pub use self::retry::GasEstimator;
pub use self::retry::RetryTransaction;
use crate::models::currency::ConversionError;
use crate::models::transaction::Transaction;

pub const CANCEL_TRANSACTION_MODAL: &str = "CANCEL_TRANSACTION";
pub const SIDEBAR_LEFT_TRANSITION: &str = "sidebar-left";

/// enumerates reasons a pending-transaction action could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PendingActionError {
    #[error("gas estimate unavailable: {0}")]
    Estimate(String),

    #[error(transparent)]
    InvalidNumericInput(#[from] ConversionError),

    // catch-all error, eg for anyhow errors
    #[error("pending action failed.  reason: {0}")]
    Failed(String),
}

// convert anyhow::Error to a PendingActionError::Failed.
// note that anyhow Error is not serializable.
impl From<anyhow::Error> for PendingActionError {
    fn from(e: anyhow::Error) -> Self {
        Self::Failed(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name")]
pub enum Modal {
    #[serde(rename = "CANCEL_TRANSACTION", rename_all = "camelCase")]
    CancelTransaction {
        transaction_id: u64,
        original_gas_price: Option<String>,
    },
}

impl Modal {
    pub fn name(&self) -> &'static str {
        match self {
            Modal::CancelTransaction { .. } => CANCEL_TRANSACTION_MODAL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
pub enum SidebarKind {
    #[serde(rename = "customize-gas")]
    #[strum(serialize = "customize-gas")]
    CustomizeGas,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    pub transition_name: String,
    #[serde(rename = "type")]
    pub kind: SidebarKind,
    pub transaction: Transaction,
}

/// Effects requested by the pending-transaction workflows.
pub trait ActivityDispatcher: Send + Sync {
    fn show_modal(&self, modal: Modal);

    fn show_sidebar(&self, sidebar: Sidebar);

    /// `gas_price` is hex encoded base units
    fn set_custom_gas_price_for_retry(&self, gas_price: String);

    /// `gas_limit` is hex encoded
    fn set_custom_gas_limit(&self, gas_limit: Option<String>);

    fn set_selected_token(&self, token_address: Option<String>);
}
