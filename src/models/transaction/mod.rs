//! Transactions as the wallet records them, and the groups that bundle an
//! original submission with its speed-ups and cancellations.

pub mod method_data;
pub mod token_data;

use serde::Deserialize;
use serde::Serialize;

/// Receipt status recorded for a transaction that was mined but reverted.
pub const FAILED_RECEIPT_STATUS: &str = "0x0";

/// What the user intended a transaction to do, as recorded when it was
/// created.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIs,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TransactionCategory {
    /// plain transfer of the native asset
    #[default]
    #[serde(alias = "sentEther")]
    Send,
    Approve,
    ContractDeployment,
    ContractInteraction,
    Incoming,

    /// token transfer
    Transfer,

    /// token transfer on behalf of another account
    #[serde(rename = "transferfrom")]
    #[strum(serialize = "transferfrom")]
    TransferFrom,
}

/// Distinguishes an original submission from the replacements the wallet
/// creates for it.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Standard,
    Retry,
    Cancel,
}

/// Lifecycle states a transaction moves through in the wallet.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIs,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionStatus {
    Unapproved,
    Rejected,
    Approved,
    Signed,
    Submitted,
    Confirmed,
    Failed,
    Dropped,
    Cancelled,
}

impl TransactionStatus {
    /// Approved by the user or handed to the network, but not yet settled.
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Approved | Self::Submitted)
    }
}

/// The status shown to the user: both in-flight states read as `pending`,
/// everything else passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum DisplayStatus {
    Pending,
    Settled(TransactionStatus),
}

impl From<TransactionStatus> for DisplayStatus {
    fn from(status: TransactionStatus) -> Self {
        if status.is_in_flight() {
            Self::Pending
        } else {
            Self::Settled(status)
        }
    }
}

impl From<DisplayStatus> for String {
    fn from(status: DisplayStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Settled(status) => write!(f, "{status}"),
        }
    }
}

impl DisplayStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Settled(TransactionStatus::Failed))
    }

    pub fn is_unapproved(&self) -> bool {
        matches!(self, Self::Settled(TransactionStatus::Unapproved))
    }
}

/// Parameters of the transaction as submitted. Numeric fields are
/// hexadecimal strings of base units.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxParams {
    pub from: String,

    /// absent for contract deployments
    #[serde(default)]
    pub to: Option<String>,

    #[serde(default = "zero_hex")]
    pub value: String,

    #[serde(default)]
    pub gas: Option<String>,

    #[serde(default)]
    pub gas_price: Option<String>,

    #[serde(default)]
    pub data: Option<String>,
}

fn zero_hex() -> String {
    "0x0".to_owned()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,

    pub tx_params: TxParams,

    /// creation time, milliseconds since the unix epoch
    #[serde(default)]
    pub time: Option<u64>,

    /// time the network accepted the transaction, milliseconds since the
    /// unix epoch
    #[serde(default)]
    pub submitted_time: Option<u64>,

    #[serde(default)]
    pub origin: Option<String>,

    #[serde(default)]
    pub transaction_category: TransactionCategory,

    pub status: TransactionStatus,

    #[serde(rename = "type", default)]
    pub tx_type: TransactionType,

    #[serde(default)]
    pub tx_receipt: Option<TxReceipt>,
}

impl Transaction {
    /// The status this transaction should be reported under.
    ///
    /// A mined transaction whose receipt reports failure is `failed`
    /// whatever the wallet recorded, and a confirmed cancellation is
    /// `cancelled`.
    pub fn status_key(&self) -> TransactionStatus {
        let reverted = self
            .tx_receipt
            .as_ref()
            .and_then(|receipt| receipt.status.as_deref())
            == Some(FAILED_RECEIPT_STATUS);

        if reverted {
            TransactionStatus::Failed
        } else if self.status.is_confirmed() && self.tx_type == TransactionType::Cancel {
            TransactionStatus::Cancelled
        } else {
            self.status
        }
    }

    /// Translation key describing the action this transaction performs.
    pub fn action_key(&self) -> &'static str {
        if self.tx_type == TransactionType::Cancel {
            return "cancelAttempt";
        }
        if self.tx_params.to.is_none() {
            return "contractDeployment";
        }

        match self.transaction_category {
            TransactionCategory::Transfer => "sendTokens",
            TransactionCategory::Approve => "approve",
            TransactionCategory::TransferFrom => "transferFrom",
            TransactionCategory::ContractInteraction => "contractInteraction",
            TransactionCategory::ContractDeployment => "contractDeployment",
            TransactionCategory::Send | TransactionCategory::Incoming => "sentEther",
        }
    }
}

/// One logical user action: the first submission plus any speed-ups or
/// cancellations sent for the same nonce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionGroup {
    #[serde(default)]
    pub nonce: Option<String>,

    /// the first transaction submitted; determines what the group is for
    pub initial_transaction: Transaction,

    /// the most relevant transaction; determines gas and status
    pub primary_transaction: Transaction,

    /// every transaction in the group, oldest first
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub has_cancelled: bool,

    #[serde(default)]
    pub has_retried: bool,
}

impl TransactionGroup {
    /// A group holding a single transaction.
    pub fn single(transaction: Transaction) -> Self {
        Self {
            nonce: None,
            initial_transaction: transaction.clone(),
            primary_transaction: transaction.clone(),
            transactions: vec![transaction],
            has_cancelled: false,
            has_retried: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.initial_transaction.id
    }

    /// The oldest transaction in the group.
    pub fn earliest_transaction(&self) -> &Transaction {
        self.transactions
            .first()
            .unwrap_or(&self.initial_transaction)
    }
}
